//! Tests for byte-level record export and import

#[cfg(test)]
mod tests {
    use crate::common::{at, grid64};
    use tilegrid::io::snapshot::{
        TILE_BYTES, TILE_EXTENDED_BYTES, export_extended, export_tiles, import,
    };
    use tilegrid::kinds::water;
    use tilegrid::tile::record::{Tile, TileExtended};
    use tilegrid::{GridError, MapConfig, TileType};

    // Tests the field order of the core record
    // Verified by swapping the m2 byte order
    #[test]
    fn test_tile_byte_layout() {
        let tile = Tile {
            type_bits: 0x91,
            height: 7,
            m2: 0xBEEF,
            m1: 0x10,
            m3: 0x20,
            m4: 0x30,
            m5: 0x40,
        };
        assert_eq!(tile.to_bytes(), [0x91, 7, 0xEF, 0xBE, 0x10, 0x20, 0x30, 0x40]);
        assert_eq!(Tile::from_bytes(tile.to_bytes()), tile);

        let ext = TileExtended { m6: 0xAA, m7: 0x55 };
        assert_eq!(ext.to_bytes(), [0xAA, 0x55]);
        assert_eq!(TileExtended::from_bytes([0xAA, 0x55]), ext);
    }

    // Tests that a map survives export and import unchanged
    #[test]
    fn test_grid_export_import() {
        let config = MapConfig::new(64, 64);
        let mut grid = grid64();
        let tile = at(&grid, 10, 10);
        water::make_canal(&mut grid, tile, tilegrid::Owner::company(1), 0x5A);
        grid.ext_mut(tile).m7 = 9;

        let tiles = export_tiles(&grid);
        let extended = export_extended(&grid);
        assert_eq!(tiles.len(), 64 * 64 * TILE_BYTES);
        assert_eq!(extended.len(), 64 * 64 * TILE_EXTENDED_BYTES);

        let restored = import(&config, &tiles, &extended).unwrap();
        assert_eq!(restored.tiles(), grid.tiles());
        assert_eq!(restored.extended(), grid.extended());
        assert_eq!(restored.tile_type(tile), TileType::Water);
        assert!(water::is_canal(&restored, tile));
    }

    // Tests that ragged or short streams are refused
    #[test]
    fn test_import_rejects_bad_streams() {
        let config = MapConfig::new(64, 64);
        let err = import(&config, &[0; 9], &[]).unwrap_err();
        assert!(matches!(err, GridError::InvalidParameter { parameter: "tiles", .. }));

        let err = import(&config, &[0; 8], &[0; 3]).unwrap_err();
        assert!(matches!(err, GridError::InvalidParameter { parameter: "extended", .. }));

        let err = import(&config, &[0; 8], &[0; 2]).unwrap_err();
        assert!(matches!(err, GridError::RecordCountMismatch { expected: 4096, .. }));
    }
}
