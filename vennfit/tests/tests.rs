#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use venn_rs::entities::VennInstance;
    use venn_rs::layout::{label_anchors, scale_solution, solve};
    use vennfit::config::VennfitConfig;
    use vennfit::io;

    #[test_case("../assets/two_sets.json"; "two_sets")]
    #[test_case("../assets/three_ring.json"; "three_ring")]
    #[test_case("../assets/disjoint.json"; "disjoint")]
    #[test_case("../assets/subset.json"; "subset")]
    #[test_case("../assets/eight_ring.json"; "eight_ring")]
    fn end_to_end(instance_path: &str) {
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let config = VennfitConfig::default();

        let instance = VennInstance::new(&ext_instance.regions).unwrap();
        let solution = solve(&instance, &config.layout).unwrap();

        assert_eq!(solution.circles.len(), instance.n_sets());
        assert!(solution.residual_loss.is_finite());

        let scaled = scale_solution(
            &solution.circles,
            config.width,
            config.height,
            config.padding,
        );
        for c in &scaled {
            assert!(c.center.0 - c.radius >= config.padding - 1e-6);
            assert!(c.center.1 - c.radius >= config.padding - 1e-6);
            assert!(c.center.0 + c.radius <= config.width - config.padding + 1e-6);
            assert!(c.center.1 + c.radius <= config.height - config.padding + 1e-6);
        }

        // one anchor per input region, in input order
        let anchors = label_anchors(&instance, &scaled);
        assert_eq!(anchors.len(), ext_instance.regions.len());
    }

    #[test]
    fn deterministic_with_a_fixed_seed() {
        let ext_instance = io::read_instance(Path::new("../assets/eight_ring.json")).unwrap();
        let config = VennfitConfig::default();

        let instance = VennInstance::new(&ext_instance.regions).unwrap();
        let first = solve(&instance, &config.layout).unwrap();
        let second = solve(&instance, &config.layout).unwrap();

        assert_eq!(first.residual_loss, second.residual_loss);
        for (a, b) in first.circles.iter().zip(second.circles.iter()) {
            assert_eq!(a.center, b.center);
            assert_eq!(a.radius, b.radius);
        }
    }
}
