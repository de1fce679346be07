//! Tests for engine constants and map configuration

#[cfg(test)]
mod tests {
    use tilegrid::io::configuration::{
        DEFAULT_MAP_SIZE, MAX_LAND_SEARCH, MAX_MAP_SIZE, MAX_TILE_HEIGHT, MAX_WATER_SEARCH,
        MIN_MAP_SIZE, TILE_HEIGHT, TILE_SIZE, TILE_UNIT_MASK, WATER_ONLY_MAP_LAND_DISTANCE,
    };
    use tilegrid::{GridError, MapConfig};

    // Tests the map size envelope
    // Verified by dropping the power-of-two check
    #[test]
    fn test_size_envelope() {
        assert_eq!((MIN_MAP_SIZE, MAX_MAP_SIZE), (64, 4096));
        assert!(MapConfig::new(64, 4096).validate().is_ok());
        assert!(MapConfig::new(32, 64).validate().is_err());
        assert!(MapConfig::new(64, 8192).validate().is_err());

        let err = MapConfig::new(256, 300).validate().unwrap_err();
        assert!(matches!(err, GridError::InvalidMapSize { axis: "y", size: 300 }));
    }

    // Tests that the x axis is reported first
    #[test]
    fn test_first_bad_axis_reported() {
        let err = MapConfig::new(0, 0).validate().unwrap_err();
        assert!(matches!(err, GridError::InvalidMapSize { axis: "x", size: 0 }));
    }

    // Tests the defaults
    #[test]
    fn test_default_is_valid() {
        let config = MapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.size_x, config.size_y), (DEFAULT_MAP_SIZE, DEFAULT_MAP_SIZE));
        assert!(!config.freeform_edges);
        assert!(config.with_freeform_edges(true).freeform_edges);
    }

    // Tests world unit constants
    #[test]
    fn test_world_units() {
        assert_eq!(TILE_SIZE, 16);
        assert_eq!(TILE_UNIT_MASK, 15);
        assert_eq!(TILE_HEIGHT, 8);
        assert_eq!(MAX_TILE_HEIGHT, 255);
    }

    // Tests the closest-water search caps
    #[test]
    fn test_search_caps() {
        assert_eq!(MAX_WATER_SEARCH, 0x7F);
        assert_eq!(MAX_LAND_SEARCH, 0x200);
        assert_eq!(WATER_ONLY_MAP_LAND_DISTANCE, 0x1FF);
    }

    // Tests loading a config from JSON, with missing fields defaulted
    #[test]
    fn test_deserialize_with_defaults() {
        let config: MapConfig = serde_json::from_str(r#"{"size_x": 512}"#).unwrap();
        assert_eq!(config, MapConfig::new(512, DEFAULT_MAP_SIZE));

        let config: MapConfig =
            serde_json::from_str(r#"{"size_x": 64, "size_y": 128, "freeform_edges": true}"#)
                .unwrap();
        assert_eq!(config, MapConfig::new(64, 128).with_freeform_edges(true));
    }

    // Tests that unknown keys are rejected
    // Verified by removing deny_unknown_fields
    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<MapConfig>(r#"{"size_x": 64, "climate": "arctic"}"#);
        assert!(result.is_err());
    }
}
