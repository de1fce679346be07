//! Signal types and states

raw_enum! {
    /// Behaviour of a signal
    pub enum SignalType {
        /// Plain block signal
        Normal = 0,
        /// Pre-signal entry
        Entry = 1,
        /// Pre-signal exit
        Exit = 2,
        /// Pre-signal combo, both entry and exit
        Combo = 3,
        /// Path signal
        Pbs = 4,
        /// One-way path signal
        PbsOneway = 5,
    }
}

raw_enum! {
    /// Visual style of a signal
    pub enum SignalVariant {
        /// Light signal
        Electric = 0,
        /// Semaphore
        Semaphore = 1,
    }
}

raw_enum! {
    /// Aspect a signal shows
    pub enum SignalState {
        /// Stop
        Red = 0,
        /// Proceed
        Green = 1,
    }
}

impl SignalType {
    /// Whether this is a path signal
    pub const fn is_pbs(self) -> bool {
        matches!(self, Self::Pbs | Self::PbsOneway)
    }

    /// Whether trains look ahead through this signal to exit signals
    pub const fn is_presignal_entry(self) -> bool {
        matches!(self, Self::Entry | Self::Combo)
    }

    /// Whether this signal reports its state to entry signals behind it
    pub const fn is_presignal_exit(self) -> bool {
        matches!(self, Self::Exit | Self::Combo)
    }

    /// Whether trains may only pass this signal from the front
    pub const fn is_oneway(self) -> bool {
        !matches!(self, Self::Pbs)
    }
}
