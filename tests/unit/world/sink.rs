//! Tests for materials, region keys and the forwarding sink implementations

#[cfg(test)]
mod tests {
    use glam::IVec3;
    use qrvoxel::world::{Material, MemoryWorld, RegionKey, ViewerId, VoxelSink};
    use std::cell::RefCell;
    use std::rc::Rc;

    // Tests packed full ids split into id and data
    // Verified by shifting by 8 instead of 4
    #[test]
    fn test_material_full_id() {
        let wool = Material::new(35, 15);
        assert_eq!(wool.full(), (35 << 4) | 15);
        assert_eq!(Material::from_full(wool.full()), Some(wool));
        assert_eq!(Material::from_full(0x231), Some(Material::new(0x23, 1)));
        assert_eq!(Material::new(1, 0x1f).data(), 0xf);
        assert_eq!(Material::default(), Material::AIR);
    }

    // Tests packed ids wider than 16 bits are refused
    // Verified by casting the id without a range check
    #[test]
    fn test_material_full_id_out_of_range() {
        assert_eq!(
            Material::from_full(0xF_FFFF),
            Some(Material::new(u16::MAX, 0xf))
        );
        assert_eq!(Material::from_full(0x10_0000), None);
        assert_eq!(Material::from_full(u32::MAX), None);
    }

    // Tests material parsing with and without data values
    // Verified by defaulting data to 15
    #[test]
    fn test_material_parse() {
        assert_eq!("35:14".parse::<Material>().unwrap(), Material::new(35, 14));
        assert_eq!("1".parse::<Material>().unwrap(), Material::new(1, 0));
        assert_eq!(Material::new(35, 14).to_string(), "35:14");
        assert!("35:16".parse::<Material>().is_err());
        assert!("stone".parse::<Material>().is_err());
    }

    // Tests region keys use arithmetic shifts so negative coordinates floor
    // Verified by dividing by 16 instead of shifting
    #[test]
    fn test_region_key_containing() {
        assert_eq!(
            RegionKey::containing(IVec3::new(15, 200, 16)),
            RegionKey { x: 0, z: 1 }
        );
        assert_eq!(
            RegionKey::containing(IVec3::new(-1, 0, -16)),
            RegionKey { x: -1, z: -1 }
        );
        assert_eq!(
            RegionKey::containing(IVec3::new(-17, 0, 0)),
            RegionKey { x: -2, z: 0 }
        );
    }

    // Tests the default height range of a sink
    // Verified by changing the default maximum
    #[test]
    fn test_default_height_range() {
        let world = MemoryWorld::new();
        assert_eq!(world.height_range(), 0..=255);
    }

    // Tests mutable references and shared cells forward to the inner world
    // Verified by making the Rc impl write to a clone
    #[test]
    fn test_forwarding_impls() {
        fn write_through<S: VoxelSink>(mut sink: S) {
            sink.set_material(IVec3::new(1, 2, 3), Material::new(1, 0))
                .unwrap();
        }

        let mut world = MemoryWorld::new();
        write_through(&mut world);
        assert_eq!(world.material_at(IVec3::new(1, 2, 3)), Material::new(1, 0));

        let shared = Rc::new(RefCell::new(MemoryWorld::with_height_range(-64, 319)));
        shared
            .borrow_mut()
            .add_viewer(ViewerId(7), RegionKey { x: 0, z: 0 });
        let mut handle = Rc::clone(&shared);
        handle
            .set_material(IVec3::new(4, 5, 6), Material::new(2, 0))
            .unwrap();

        assert_eq!(
            shared.query_material(IVec3::new(4, 5, 6)).unwrap(),
            Material::new(2, 0)
        );
        assert_eq!(
            handle.viewers_of(RegionKey { x: 0, z: 0 }),
            vec![ViewerId(7)]
        );
        assert_eq!(handle.height_range(), -64..=319);
    }
}
