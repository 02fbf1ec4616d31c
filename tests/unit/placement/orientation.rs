//! Tests for the orientation offset table and name parsing

#[cfg(test)]
mod tests {
    use glam::IVec3;
    use qrvoxel::placement::Orientation;

    // Tests every row of the offset table at a sample cell
    // Verified by flipping the sign of n in NORTH_UP
    #[test]
    fn test_offset_table() {
        let (x, y, n) = (2, 5, 7);
        let expected = [
            (Orientation::EastNorth, IVec3::new(2, 0, -2)),
            (Orientation::WestNorth, IVec3::new(-5, 0, -2)),
            (Orientation::WestSouth, IVec3::new(-5, 0, 5)),
            (Orientation::EastSouth, IVec3::new(2, 0, 5)),
            (Orientation::NorthUp, IVec3::new(0, 2, -2)),
            (Orientation::NorthDown, IVec3::new(0, -2, -2)),
            (Orientation::SouthUp, IVec3::new(0, 2, 5)),
            (Orientation::SouthDown, IVec3::new(0, -2, 5)),
            (Orientation::EastUp, IVec3::new(-5, 2, 0)),
            (Orientation::EastDown, IVec3::new(-5, -2, 0)),
            (Orientation::WestUp, IVec3::new(2, 2, 0)),
            (Orientation::WestDown, IVec3::new(2, -2, 0)),
        ];

        for (orientation, offset) in expected {
            assert_eq!(orientation.offset(x, y, n), offset, "{orientation}");
        }
    }

    // Tests flat orientations never leave the anchor's layer and upright ones do
    // Verified by marking NORTH_UP horizontal
    #[test]
    fn test_horizontal_orientations_stay_level() {
        for orientation in Orientation::ALL {
            let spans_height = (0..4)
                .flat_map(|x| (0..4).map(move |y| (x, y)))
                .any(|(x, y)| orientation.offset(x, y, 3).y != 0);
            assert_eq!(spans_height, !orientation.is_horizontal(), "{orientation}");
        }
        assert_eq!(
            Orientation::ALL
                .iter()
                .filter(|orientation| orientation.is_horizontal())
                .count(),
            4
        );
    }

    // Tests the anchor is always one corner of the projected square
    // Verified by dropping the n - prefix in SOUTH_UP
    #[test]
    fn test_anchor_is_a_corner() {
        let n = 4;
        for orientation in Orientation::ALL {
            let corners = [(0, 0), (0, n), (n, 0), (n, n)];
            assert!(
                corners
                    .iter()
                    .any(|&(x, y)| orientation.offset(x, y, n) == IVec3::ZERO),
                "{orientation} has no corner at the anchor"
            );
        }
    }

    // Tests names round-trip and parsing tolerates case and separators
    // Verified by removing the separator normalization
    #[test]
    fn test_parse_names() {
        for orientation in Orientation::ALL {
            assert_eq!(
                orientation.to_string().parse::<Orientation>().unwrap(),
                orientation
            );
        }
        assert_eq!(
            "NORTH-UP".parse::<Orientation>().unwrap(),
            Orientation::NorthUp
        );
        assert_eq!(
            "west south".parse::<Orientation>().unwrap(),
            Orientation::WestSouth
        );
        assert!("up_north".parse::<Orientation>().is_err());
    }
}
