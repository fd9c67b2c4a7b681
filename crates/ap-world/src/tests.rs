//! Unit tests for ap-world.
//!
//! All tests use hand-built grids so they run without any world file.

#[cfg(test)]
mod block {
    use crate::BlockKind;

    #[test]
    fn parse_and_display() {
        assert_eq!("flower".parse::<BlockKind>().unwrap(), BlockKind::Flower);
        assert_eq!(" hive ".parse::<BlockKind>().unwrap(), BlockKind::Hive);
        assert_eq!(BlockKind::Solid.to_string(), "solid");
        assert!("lava".parse::<BlockKind>().is_err());
    }

    #[test]
    fn passability() {
        assert!(BlockKind::Air.is_passable());
        assert!(BlockKind::Flower.is_passable());
        assert!(!BlockKind::Solid.is_passable());
        assert!(!BlockKind::Hive.is_passable());
    }
}

// ── Ring scan ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use ap_core::BlockPos;

    use crate::{find_block, ring_scan, BlockKind, GridWorld};

    fn flowers(at: &[BlockPos]) -> GridWorld {
        let mut w = GridWorld::new();
        for &p in at {
            w.set_block(p, BlockKind::Flower);
        }
        w
    }

    #[test]
    fn golden_order_radius_one() {
        let got: Vec<BlockPos> = ring_scan(BlockPos::ORIGIN, 1, 1).collect();
        let want = vec![
            BlockPos::new(0, 0, 0),
            BlockPos::new(1, 0, 0),
            BlockPos::new(-1, 0, 0),
            BlockPos::new(0, 0, 1),
            BlockPos::new(0, 0, -1),
            BlockPos::new(0, 1, 0),
            BlockPos::new(0, -1, 0),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn ring_tie_break_prefers_scan_order() {
        // (3,0,0) is at distance 3, (3,0,1) at sqrt(10): the ring scan
        // returns (3,0,0) first.
        let w = flowers(&[BlockPos::new(3, 0, 1), BlockPos::new(3, 0, 0)]);
        let found = find_block(&w, BlockPos::ORIGIN, 5, 5, BlockKind::is_flower);
        assert_eq!(found, Some(BlockPos::new(3, 0, 0)));
    }

    #[test]
    fn equidistant_candidates_resolve_x_axis_first() {
        let w = flowers(&[BlockPos::new(0, 0, 3), BlockPos::new(3, 0, 0)]);
        let found = find_block(&w, BlockPos::ORIGIN, 5, 5, BlockKind::is_flower);
        assert_eq!(found, Some(BlockPos::new(3, 0, 0)));
    }

    #[test]
    fn same_layer_beats_nearer_cell_on_other_layer() {
        // (0,1,0) is closer, but the agent's own layer is scanned first.
        let w = flowers(&[BlockPos::new(0, 1, 0), BlockPos::new(2, 0, 0)]);
        let found = find_block(&w, BlockPos::ORIGIN, 5, 5, BlockKind::is_flower);
        assert_eq!(found, Some(BlockPos::new(2, 0, 0)));
    }

    #[test]
    fn out_of_range_is_not_found() {
        let w = flowers(&[BlockPos::new(6, 0, 0), BlockPos::new(4, 0, 4)]);
        let found = find_block(&w, BlockPos::ORIGIN, 5, 5, BlockKind::is_flower);
        assert_eq!(found, None);
    }

    #[test]
    fn scan_is_relative_to_origin() {
        let origin = BlockPos::new(10, 64, -10);
        let first: Vec<BlockPos> = ring_scan(origin, 2, 0).take(2).collect();
        assert_eq!(first, vec![origin, origin.offset(1, 0, 0)]);
    }

    #[test]
    fn every_cell_visited_once() {
        let mut cells: Vec<BlockPos> = ring_scan(BlockPos::ORIGIN, 3, 3).collect();
        let n = cells.len();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), n);
    }
}

// ── POI index & world ────────────────────────────────────────────────────────

#[cfg(test)]
mod poi {
    use ap_core::BlockPos;

    use crate::{BlockKind, GridWorld, World};

    #[test]
    fn hive_block_registers_poi() {
        let mut w = GridWorld::new();
        w.set_block(BlockPos::new(4, 0, 0), BlockKind::Hive);
        assert_eq!(w.block_at(BlockPos::new(4, 0, 0)), BlockKind::Hive);
        assert!(w.poi_at(BlockPos::new(4, 0, 0)).is_some());

        w.set_block(BlockPos::new(4, 0, 0), BlockKind::Air);
        assert!(w.poi_at(BlockPos::new(4, 0, 0)).is_none());
        assert_eq!(w.block_at(BlockPos::new(4, 0, 0)), BlockKind::Air);
        assert_eq!(w.block_count(), 0);
    }

    #[test]
    fn nearest_respects_radius_and_predicate() {
        let mut w = GridWorld::new();
        w.add_hive(BlockPos::new(5, 0, 0), 1);
        w.add_hive(BlockPos::new(8, 0, 0), 1);
        w.add_hive(BlockPos::new(30, 0, 0), 1);

        let any = |_: &crate::PointOfInterest| true;
        assert_eq!(w.nearest_poi(BlockPos::ORIGIN, 20, &any), Some(BlockPos::new(5, 0, 0)));

        let skip_first = |p: &crate::PointOfInterest| p.pos != BlockPos::new(5, 0, 0);
        assert_eq!(w.nearest_poi(BlockPos::ORIGIN, 20, &skip_first), Some(BlockPos::new(8, 0, 0)));

        let far_only = |p: &crate::PointOfInterest| p.pos.x > 10;
        assert_eq!(w.nearest_poi(BlockPos::ORIGIN, 20, &far_only), None);
    }

    #[test]
    fn full_hives_can_be_filtered() {
        let mut w = GridWorld::new();
        w.add_hive(BlockPos::new(2, 0, 0), 1);
        w.add_hive(BlockPos::new(6, 0, 0), 1);
        assert!(w.set_occupants(BlockPos::new(2, 0, 0), 1));
        assert!(!w.set_occupants(BlockPos::new(3, 0, 0), 1));

        let free = |p: &crate::PointOfInterest| p.has_space();
        assert_eq!(w.nearest_poi(BlockPos::ORIGIN, 20, &free), Some(BlockPos::new(6, 0, 0)));
    }

    #[test]
    fn equidistant_pois_break_ties_by_position() {
        let mut w = GridWorld::new();
        w.add_hive(BlockPos::new(0, 0, 4), 1);
        w.add_hive(BlockPos::new(-4, 0, 0), 1);
        w.add_hive(BlockPos::new(4, 0, 0), 1);
        let any = |_: &crate::PointOfInterest| true;
        assert_eq!(w.nearest_poi(BlockPos::ORIGIN, 10, &any), Some(BlockPos::new(-4, 0, 0)));
    }

    #[test]
    fn far_coordinates_do_not_overflow() {
        let mut w = GridWorld::new();
        w.add_hive(BlockPos::ORIGIN, 1);
        w.add_hive(BlockPos::new(100_010, 64, 0), 1);
        let any = |_: &crate::PointOfInterest| true;

        assert_eq!(w.nearest_poi(BlockPos::new(100_000, 64, 0), 20, &any), Some(BlockPos::new(100_010, 64, 0)));
        assert_eq!(w.nearest_poi(BlockPos::new(100_000, 64, 30), 20, &any), None);
        assert_eq!(w.nearest_poi(BlockPos::new(-2_000_000_000, 0, 0), 20, &any), None);
    }
}

// ── Navigator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod nav {
    use ap_core::BlockPos;

    use crate::{BlockKind, GridNavigator, GridWorld, Navigator};

    #[test]
    fn straight_path_reaches_target() {
        let w = GridWorld::new();
        let mut nav = GridNavigator::new(16);
        nav.start_moving_to(&w, BlockPos::ORIGIN, BlockPos::new(5, 0, 0), 1.0);
        assert!(nav.is_following_path());
        assert!(nav.current_path_reaches_target());
        assert_eq!(nav.path().unwrap().cells.len(), 5);
        assert_eq!(nav.path().unwrap().end(), Some(BlockPos::new(5, 0, 0)));
    }

    #[test]
    fn advance_moves_one_cell_per_tick_then_idles() {
        let w = GridWorld::new();
        let mut nav = GridNavigator::new(16);
        let mut pos = BlockPos::ORIGIN;
        nav.start_moving_to(&w, pos, BlockPos::new(3, 0, 0), 1.0);

        pos = nav.advance(&w, pos);
        assert_eq!(pos, BlockPos::new(1, 0, 0));
        pos = nav.advance(&w, pos);
        pos = nav.advance(&w, pos);
        assert_eq!(pos, BlockPos::new(3, 0, 0));
        assert!(nav.is_idle());
        assert_eq!(nav.advance(&w, pos), pos);
    }

    #[test]
    fn half_speed_takes_two_ticks_per_cell() {
        let w = GridWorld::new();
        let mut nav = GridNavigator::new(16);
        let mut pos = BlockPos::ORIGIN;
        nav.start_moving_to(&w, pos, BlockPos::new(2, 0, 0), 0.5);
        pos = nav.advance(&w, pos);
        assert_eq!(pos, BlockPos::ORIGIN);
        pos = nav.advance(&w, pos);
        assert_eq!(pos, BlockPos::new(1, 0, 0));
    }

    #[test]
    fn distant_target_needs_range_multiplier() {
        let w = GridWorld::new();
        let mut nav = GridNavigator::new(16);
        nav.start_moving_to(&w, BlockPos::ORIGIN, BlockPos::new(40, 0, 0), 1.0);
        assert!(!nav.current_path_reaches_target());
        assert_eq!(nav.path().unwrap().cells.len(), 16);

        nav.set_range_multiplier(10.0);
        nav.start_moving_to(&w, BlockPos::ORIGIN, BlockPos::new(40, 0, 0), 1.0);
        assert!(nav.current_path_reaches_target());

        nav.reset_range_multiplier();
        assert_eq!(nav.range_multiplier(), 1.0);
    }

    #[test]
    fn sealed_target_is_unreachable() {
        let mut w = GridWorld::new();
        w.fill(BlockPos::new(4, -1, -1), BlockPos::new(6, 1, 1), BlockKind::Solid);
        w.set_block(BlockPos::new(5, 0, 0), BlockKind::Air);

        let mut nav = GridNavigator::new(16);
        nav.start_moving_to(&w, BlockPos::ORIGIN, BlockPos::new(5, 0, 0), 1.0);
        assert!(!nav.current_path_reaches_target());
        assert!(nav.path().unwrap().cells.len() <= 16);
    }

    #[test]
    fn path_may_end_inside_hive() {
        let mut w = GridWorld::new();
        w.add_hive(BlockPos::new(3, 0, 0), 1);
        let mut nav = GridNavigator::new(16);
        nav.start_moving_to(&w, BlockPos::ORIGIN, BlockPos::new(3, 0, 0), 1.0);
        assert!(nav.current_path_reaches_target());
    }

    #[test]
    fn stop_clears_path() {
        let w = GridWorld::new();
        let mut nav = GridNavigator::new(16);
        nav.start_moving_to(&w, BlockPos::ORIGIN, BlockPos::new(5, 0, 0), 1.0);
        nav.stop();
        assert!(nav.is_idle());
        assert!(!nav.current_path_reaches_target());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use ap_core::BlockPos;

    use crate::{load_world_csv, load_world_reader, BlockKind, World};

    const CSV: &str = "\
x,y,z,kind,capacity
0,-1,0,solid,
3,0,0,flower,
10,0,4,hive,2
12,0,4,hive,
";

    #[test]
    fn loads_blocks_and_hives() {
        let w = load_world_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(w.block_at(BlockPos::new(0, -1, 0)), BlockKind::Solid);
        assert_eq!(w.block_at(BlockPos::new(3, 0, 0)), BlockKind::Flower);
        assert_eq!(w.poi_at(BlockPos::new(10, 0, 4)).unwrap().capacity, 2);
        assert_eq!(
            w.poi_at(BlockPos::new(12, 0, 4)).unwrap().capacity,
            crate::world::DEFAULT_HIVE_CAPACITY
        );
        assert_eq!(w.pois().len(), 2);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let bad = "x,y,z,kind,capacity\n0,0,0,lava,\n";
        assert!(load_world_reader(Cursor::new(bad)).is_err());
    }

    #[test]
    fn malformed_row_is_an_error() {
        let bad = "x,y,z,kind,capacity\nzero,0,0,air,\n";
        assert!(load_world_reader(Cursor::new(bad)).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let w = load_world_csv(file.path()).unwrap();
        assert_eq!(w.pois().len(), 2);
    }
}
