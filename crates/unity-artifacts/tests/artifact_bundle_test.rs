//! Full-bundle integration: run an audit, render the four artifacts,
//! and inspect them as a downstream reader would.

use unity_core::config::{AuditConfig, WeightConfig};
use unity_core::types::Snapshot;
use unity_artifacts::ArtifactBundle;
use unity_engine::{AuditPipeline, ExclusionRequest};

fn wetland_snapshot() -> Snapshot {
    Snapshot::builder(["area", "endemism"])
        .item_with_vintages("Kopački Rit", &[23894.0, 5.0], &[Some(2024), Some(2024)])
        .item_with_vintages("Lonjsko Polje", &[50560.0, 3.0], &[Some(2024), Some(2024)])
        .item_with_vintages("Crna Mlaka", &[625.0, 1.0], &[Some(2024), Some(2024)])
        .item_with_vintages(
            "Lower Neretva Valley",
            &[12000.0, 18.0],
            &[Some(2013), Some(2024)],
        )
        .item_with_vintages("Vransko Lake", &[5748.0, 4.0], &[Some(2024), Some(2024)])
        .build()
        .unwrap()
}

fn endemism_priority_config() -> AuditConfig {
    AuditConfig {
        weights: WeightConfig::from_pairs([("area", 0.3), ("endemism", 0.7)]),
        ..AuditConfig::default()
    }
}

#[test]
fn bundle_is_complete_and_readable() {
    let outcome = AuditPipeline::new(endemism_priority_config())
        .run(&wetland_snapshot())
        .unwrap();

    let rendered = ArtifactBundle::render_all(&outcome).unwrap();
    assert_eq!(rendered.len(), 4);

    let share_table = &rendered[0].contents;
    assert!(share_table.starts_with("item,composite_share,"));
    assert_eq!(share_table.lines().count(), 6, "header plus five sites");

    let trace = &rendered[1].contents;
    assert!(trace.contains("Operator Weight Declaration"));
    assert!(trace.contains("Unity Check"));

    let change_log = &rendered[2].contents;
    assert!(change_log.starts_with("item,drift_flag,"));

    let coverage: serde_json::Value = serde_json::from_str(&rendered[3].contents).unwrap();
    assert_eq!(coverage["run_id"], serde_json::json!(outcome.stamp.run_id));
}

#[test]
fn exclusion_appears_in_every_artifact_that_reports_it() {
    let outcome = AuditPipeline::new(endemism_priority_config())
        .run_with_exclusions(
            &wetland_snapshot(),
            &[ExclusionRequest::new(
                "Crna Mlaka",
                "Outside the ranking scope for this cycle.",
            )],
        )
        .unwrap();

    let rendered = ArtifactBundle::render_all(&outcome).unwrap();
    let by_name = |name: &str| {
        rendered
            .iter()
            .find(|a| a.file_name == name)
            .unwrap()
            .contents
            .clone()
    };

    // Excluded site left the share table entirely.
    let share_table = by_name("share_table.csv");
    assert!(!share_table.contains("Crna Mlaka"));
    assert_eq!(share_table.lines().count(), 5, "header plus four sites");

    // The trace carries the exclusion with its stated reason.
    let trace = by_name("trace_report.csv");
    assert!(trace.contains("Exclusion"));
    assert!(trace.contains("Crna Mlaka"));

    // The coverage record books the discarded mass.
    let coverage: serde_json::Value =
        serde_json::from_str(&by_name("coverage_record.json")).unwrap();
    assert_eq!(coverage["exclusions"][0]["entity"], "Crna Mlaka");
    assert!(coverage["discarded_mass"].as_f64().unwrap() > 0.0);
}

#[test]
fn drift_flag_lands_in_both_the_share_table_and_the_change_log() {
    // Lonjsko Polje carries 54% of the area column against a 0.3 target;
    // with the default 0.15 tolerance that is an area pull.
    let config = AuditConfig {
        weights: WeightConfig::from_pairs([("area", 0.3), ("endemism", 0.7)]),
        ..AuditConfig::default()
    };
    let outcome = AuditPipeline::new(config).run(&wetland_snapshot()).unwrap();
    let rendered = ArtifactBundle::render_all(&outcome).unwrap();

    let share_table = &rendered[0].contents;
    let lonjsko_row = share_table
        .lines()
        .find(|line| line.starts_with("Lonjsko Polje,"))
        .unwrap();
    assert!(lonjsko_row.contains("area Pull"));

    let change_log = &rendered[2].contents;
    assert!(change_log
        .lines()
        .any(|line| line.starts_with("Lonjsko Polje,") && line.contains("area Pull")));
}
