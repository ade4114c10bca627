//! Unit tests for arena geometry and the boundary/obstacle resolvers.

use shoal_core::{FishId, FishRng, TrialRng, Vec2};

use crate::{Arena, Obstacle, Side, edge_proximity_vector, resolve_obstacle, resolve_walls};

fn rng() -> FishRng {
    FishRng::new(42, FishId(0))
}

#[cfg(test)]
mod arena {
    use super::*;

    #[test]
    fn standard_dimensions() {
        let a = Arena::standard();
        assert_eq!(a.width, 1400.0);
        assert_eq!(a.height, 800.0);
        assert_eq!(a.decision_x, 520.0);
        assert_eq!(a.shaded_area_x, 280.0);
    }

    #[test]
    fn contains_and_side() {
        let a = Arena::standard();
        assert!(a.contains(Vec2::new(0.0, 0.0)));
        assert!(a.contains(Vec2::new(1400.0, 800.0)));
        assert!(!a.contains(Vec2::new(-0.1, 10.0)));
        assert_eq!(a.side_of(Vec2::new(500.0, 100.0)), Side::Top);
        assert_eq!(a.side_of(Vec2::new(500.0, 700.0)), Side::Bottom);
    }

    #[test]
    fn corner_pins() {
        let a = Arena::standard();
        assert_eq!(a.corner_pin(Side::Top), Vec2::new(10.0, 10.0));
        assert_eq!(a.corner_pin(Side::Bottom), Vec2::new(10.0, 790.0));
    }

    #[test]
    fn replica_geometry() {
        let a = Arena::standard();
        assert_eq!(a.replica_start(Side::Top), Vec2::new(1360.0, 375.0));
        assert_eq!(a.replica_start(Side::Bottom), Vec2::new(1360.0, 415.0));
        assert_eq!(a.replica_target(Side::Top), Vec2::new(0.0, 80.0));
        assert_eq!(a.replica_target(Side::Bottom), Vec2::new(0.0, 720.0));
    }

    #[test]
    fn spawn_inside_box() {
        let a = Arena::standard();
        let mut rng = TrialRng::new(7);
        for _ in 0..100 {
            let p = a.spawn_position(&mut rng);
            assert!((a.spawn_left..a.spawn_left + a.spawn_size).contains(&p.x));
            assert!((a.spawn_top..a.spawn_top + a.spawn_size).contains(&p.y));
        }
    }
}

#[cfg(test)]
mod obstacle {
    use super::*;

    #[test]
    fn edge_lines() {
        let o = Obstacle;
        assert_eq!(o.top_edge_y(0.0), 160.0);
        assert_eq!(o.bottom_edge_y(0.0), 640.0);
        // both edges meet at the apex
        assert!((o.top_edge_y(700.0) - 400.0).abs() < 1e-3);
        assert!((o.bottom_edge_y(700.0) - 400.0).abs() < 1e-3);
    }

    #[test]
    fn inside_test() {
        let o = Obstacle;
        assert!(o.contains(Vec2::new(100.0, 400.0)));
        assert!(!o.contains(Vec2::new(100.0, 100.0))); // above the triangle
        assert!(!o.contains(Vec2::new(100.0, 700.0))); // below
        assert!(!o.contains(Vec2::new(800.0, 400.0))); // past the apex
    }

    #[test]
    fn edge_dirs_are_unit() {
        let o = Obstacle;
        assert!((o.top_edge_dir().magnitude() - 1.0).abs() < 1e-6);
        assert!((o.bottom_edge_dir().magnitude() - 1.0).abs() < 1e-6);
        assert!(o.top_edge_dir().y > 0.0);
        assert!(o.bottom_edge_dir().y < 0.0);
    }

    #[test]
    fn perpendicular_distance() {
        let o = Obstacle;
        // a point on the top edge line has distance ~0
        let on_edge = Vec2::new(350.0, o.top_edge_y(350.0));
        assert!(o.distance_to_top_edge(on_edge).unwrap() < 1e-3);
        // the apex lies on both lines
        let apex = Vec2::new(700.0, 400.0);
        assert!(o.distance_to_top_edge(apex).unwrap() < 1e-3);
        assert!(o.distance_to_bottom_edge(apex).unwrap() < 1e-3);
    }

    #[test]
    fn non_finite_input_is_not_applicable() {
        let o = Obstacle;
        assert!(o.distance_to_top_edge(Vec2::new(f32::NAN, 0.0)).is_none());
        assert!(o.distance_to_bottom_edge(Vec2::new(0.0, f32::INFINITY)).is_none());
    }
}

#[cfg(test)]
mod walls {
    use super::*;

    #[test]
    fn in_bounds_is_untouched() {
        let a = Arena::standard();
        let mut pos = Vec2::new(700.0, 400.0);
        let mut vel = Vec2::new(3.0, -2.0);
        assert!(!resolve_walls(&mut pos, &mut vel, &a, &mut rng()));
        assert_eq!(pos, Vec2::new(700.0, 400.0));
        assert_eq!(vel, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn left_wall_bounce_flips_inward() {
        let a = Arena::standard();
        let mut pos = Vec2::new(-5.0, 400.0);
        let mut vel = Vec2::new(-3.0, 1.0);
        let speed = vel.magnitude();
        assert!(resolve_walls(&mut pos, &mut vel, &a, &mut rng()));
        assert_eq!(pos.x, 0.0);
        assert!(vel.x > 0.0, "inward bounce must flip x: {vel}");
        assert!((vel.magnitude() - speed).abs() < 1e-4, "bounce preserves speed");
    }

    #[test]
    fn top_wall_bounce_flips_inward() {
        let a = Arena::standard();
        let mut pos = Vec2::new(700.0, -3.0);
        let mut vel = Vec2::new(2.0, -4.0);
        assert!(resolve_walls(&mut pos, &mut vel, &a, &mut rng()));
        assert_eq!(pos.y, 0.0);
        assert!(vel.y > 0.0, "inward bounce must flip y: {vel}");
    }

    #[test]
    fn corner_crossing_clamps_both_axes() {
        let a = Arena::standard();
        let mut pos = Vec2::new(1405.0, 804.0);
        let mut vel = Vec2::new(4.0, 2.0);
        assert!(resolve_walls(&mut pos, &mut vel, &a, &mut rng()));
        assert_eq!(pos, Vec2::new(1400.0, 800.0));
        assert!(vel.x < 0.0, "corner bounce points back inward: {vel}");
    }
}

#[cfg(test)]
mod intrusion {
    use super::*;

    #[test]
    fn outside_is_untouched() {
        let o = Obstacle;
        let mut pos = Vec2::new(100.0, 100.0);
        let mut vel = Vec2::new(1.0, 0.0);
        assert!(!resolve_obstacle(&mut pos, &mut vel, &o, &mut rng()));
        assert_eq!(pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn centroid_expelled_onto_nearer_edge() {
        let o = Obstacle;
        // centroid of (0,160), (0,640), (700,400); both edges equidistant,
        // the tie resolves to the bottom edge
        let mut pos = Vec2::new(700.0 / 3.0, 400.0);
        let mut vel = Vec2::new(0.0, 1.0); // heading straight at the bottom edge
        assert!(resolve_obstacle(&mut pos, &mut vel, &o, &mut rng()));
        assert!((pos.y - o.bottom_edge_y(pos.x)).abs() < 1e-3);
        assert!(!o.contains(pos), "expelled onto the boundary, not left inside");
    }

    #[test]
    fn top_intrusion_deflects_upward() {
        let o = Obstacle;
        let mut pos = Vec2::new(100.0, 200.0); // just inside the top edge
        let mut vel = Vec2::new(1.0, 0.5); // swimming down into the triangle
        assert!(resolve_obstacle(&mut pos, &mut vel, &o, &mut rng()));
        assert!((pos.y - o.top_edge_y(pos.x)).abs() < 1e-3);
        assert!(vel.y < 0.0, "deflection must point back out: {vel}");
    }

    #[test]
    fn bottom_intrusion_deflects_downward() {
        let o = Obstacle;
        let mut pos = Vec2::new(100.0, 600.0); // just inside the bottom edge
        let mut vel = Vec2::new(1.0, -0.5);
        assert!(resolve_obstacle(&mut pos, &mut vel, &o, &mut rng()));
        assert!((pos.y - o.bottom_edge_y(pos.x)).abs() < 1e-3);
        assert!(vel.y > 0.0, "deflection must point back out: {vel}");
    }
}

#[cfg(test)]
mod proximity {
    use super::*;

    #[test]
    fn open_water_senses_nothing() {
        let a = Arena::standard();
        assert_eq!(edge_proximity_vector(Vec2::new(1000.0, 400.0), &a, &Obstacle), Vec2::ZERO);
    }

    #[test]
    fn walls_in_priority_order() {
        let a = Arena::standard();
        let o = Obstacle;
        assert_eq!(edge_proximity_vector(Vec2::new(1390.0, 400.0), &a, &o), Vec2::new(-1.0, 0.0));
        assert_eq!(edge_proximity_vector(Vec2::new(1000.0, 5.0), &a, &o), Vec2::new(0.0, 1.0));
        assert_eq!(edge_proximity_vector(Vec2::new(1000.0, 795.0), &a, &o), Vec2::new(0.0, -1.0));
        // x-axis check wins over y-axis in a corner
        assert_eq!(edge_proximity_vector(Vec2::new(1395.0, 5.0), &a, &o), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn obstacle_edges_override_walls() {
        let a = Arena::standard();
        let o = Obstacle;
        let near_top = Vec2::new(100.0, o.top_edge_y(100.0) - 5.0);
        assert_eq!(edge_proximity_vector(near_top, &a, &o), Obstacle::TOP_AVOIDANCE);
        let near_bottom = Vec2::new(100.0, o.bottom_edge_y(100.0) + 5.0);
        assert_eq!(edge_proximity_vector(near_bottom, &a, &o), Obstacle::BOTTOM_AVOIDANCE);
    }
}
