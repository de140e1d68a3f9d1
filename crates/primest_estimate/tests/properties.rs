//! Properties that must hold across every class, size and clock.

use primest_diagnostics::DiagnosticSink;
use primest_estimate::{
    supported_components, Action, EnergyModel, EnergyRequest, EstimatorPlugIn, Interpolation,
    Primitive, Query, TableEstimator,
};
use primest_tables::{bucket_latency, TableStore};

/// A query carrying every attribute any class needs, at in-range sizes.
fn full_query(class_name: &str, action: &str) -> Query {
    Query::new(class_name)
        .with_attribute("technology", 45)
        .with_attribute("width", 16)
        .with_attribute("depth", 64)
        .with_attribute("n_inputs", 2)
        .with_attribute("n_outputs", 4)
        .with_attribute("length", "100um")
        .with_attribute("exponent", 8)
        .with_attribute("mantissa", 24)
        .with_action(action)
}

#[test]
fn every_advertised_class_is_supported_at_seventy() {
    let est = TableEstimator::new().unwrap();
    let sink = DiagnosticSink::new();
    for component in supported_components() {
        for action in &component.actions {
            let q = full_query(component.class_name, action);
            assert_eq!(
                est.supports_energy(&q, &sink).unwrap().percent(),
                70,
                "{} energy",
                component.class_name
            );
            assert_eq!(
                est.supports_area(&q, &sink).unwrap().percent(),
                70,
                "{} area",
                component.class_name
            );
            let energy = est.estimate_energy(&q, &sink).unwrap().value;
            assert!(energy.is_finite() && energy >= 0.0, "{}", component.class_name);
            let area = est.estimate_area(&q, &sink).unwrap().value;
            assert!(area.is_finite() && area >= 0.0, "{}", component.class_name);
        }
    }
    assert!(sink.is_empty());
}

#[test]
fn unsupported_technology_is_zero_for_every_class() {
    let est = TableEstimator::new().unwrap();
    for component in supported_components() {
        let sink = DiagnosticSink::new();
        let q = full_query(component.class_name, "access").with_attribute("technology", 65);
        assert_eq!(est.supports_energy(&q, &sink).unwrap().percent(), 0);
        assert_eq!(est.supports_area(&q, &sink).unwrap().percent(), 0);
        assert_eq!(sink.take_all().len(), 2);
    }
}

#[test]
fn bucketing_plateau() {
    for cycle_ns in [6.5, 7.0, 8.0, 9.0, 9.9, 10.0] {
        assert_eq!(bucket_latency(cycle_ns * 1e-9, 1.0).ns(), 6.0, "{cycle_ns}");
    }
    for cycle_ns in [10.5, 12.0, 50.0, 1000.0] {
        assert_eq!(bucket_latency(cycle_ns * 1e-9, 1.0).ns(), 10.0, "{cycle_ns}");
    }
    assert_eq!(bucket_latency(5e-9, 2.0).ns(), 6.0);
    assert_eq!(bucket_latency(0.7e-9, 1.0).ns(), 0.5);
    assert_eq!(bucket_latency(0.8e-9, 1.0).ns(), 1.0);
    assert_eq!(bucket_latency(2.5e-9, 1.0).ns(), 3.0);
}

#[test]
fn buckets_are_monotone() {
    let mut previous = 0.0;
    for step in 1..=400 {
        let ns = bucket_latency(step as f64 * 0.05e-9, 1.0).ns();
        assert!(ns >= previous);
        assert!([0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 10.0].contains(&ns));
        previous = ns;
    }
}

#[test]
fn interpolation_anchors() {
    for value in [0.0031, 0.21, 4.2, 280.0, 3150.0] {
        assert_eq!(Interpolation::Linear.apply(32.0, 32.0, value), value);
        assert_eq!(Interpolation::Quadratic.apply(32.0, 32.0, value), value);
        assert_eq!(Interpolation::Quadratic.apply(64.0, 64.0, value), value);

        let half_linear = Interpolation::Linear.apply(16.0, 32.0, value);
        let half_quadratic = Interpolation::Quadratic.apply(16.0, 32.0, value);
        assert!((half_linear - value / 2.0).abs() <= 1e-12 * value);
        assert!((half_quadratic - value / 4.0).abs() <= 1e-12 * value);
    }
}

#[test]
fn empty_regfile_costs_nothing() {
    let est = TableEstimator::new().unwrap();
    let sink = DiagnosticSink::new();
    for class in ["regfile", "SRAM", "FIFO"] {
        for width in [1, 16, 32] {
            for action in ["leak", "access"] {
                let q = full_query(class, action)
                    .with_attribute("width", width)
                    .with_attribute("depth", 0);
                assert_eq!(est.estimate_energy(&q, &sink).unwrap().value, 0.0);
                assert_eq!(est.estimate_area(&q, &sink).unwrap().value, 0.0);
            }
        }
    }
}

#[test]
fn mac_is_adder_plus_remapped_multiplier() {
    let tables = TableStore::embedded().unwrap();
    let model = EnergyModel::new(tables);
    let sink = DiagnosticSink::new();
    for width in [4, 8, 16, 32, 64] {
        for (mac, mult) in [
            ("mac_gated", "mult_gated"),
            ("mac_reused", "mult_reused"),
            ("mac_random", "mult_random"),
            ("leak", "leak"),
            ("access", "mult_random"),
        ] {
            let q = Query::new("intmac")
                .with_attribute("width", width)
                .with_action(mac);
            let request = EnergyRequest::from_query(&q, 5e-9).unwrap();
            let adder = request.with_primitive(Primitive::IntAdder {
                width: f64::from(width),
            });
            let multiplier = request
                .with_primitive(Primitive::IntMultiplier {
                    width: f64::from(width),
                })
                .with_action(Action::parse(mult));
            let expected = model.estimate(&adder, &sink).unwrap()
                + model.estimate(&multiplier, &sink).unwrap();
            assert_eq!(model.estimate(&request, &sink).unwrap(), expected, "{mac}/{width}");
        }
    }
}

#[test]
fn wire_energy_only_on_transfer() {
    let est = TableEstimator::new().unwrap();
    let sink = DiagnosticSink::new();
    for action in ["leak", "access", "read", "idle"] {
        let q = full_query("wire", action).with_attribute("length", "3mm");
        assert_eq!(est.estimate_energy(&q, &sink).unwrap().value, 0.0);
    }
    for action in ["transfer", "transfer_random"] {
        let q = full_query("wire", action).with_attribute("length", "3mm");
        assert!(est.estimate_energy(&q, &sink).unwrap().value > 0.0);
    }
}

#[test]
fn leak_scales_with_cycle_inside_a_bucket() {
    let est = TableEstimator::new().unwrap();
    let sink = DiagnosticSink::new();
    // 7 ns and 9 ns both use the 6 ns row; leakage grows with the period.
    let at = |cycle: f64| {
        let q = full_query("reg", "leak").with_attribute("global_cycle_seconds", cycle);
        est.estimate_energy(&q, &sink).unwrap().value
    };
    let ratio = at(9e-9) / at(7e-9);
    assert!((ratio - 9.0 / 7.0).abs() < 1e-12);
}
