//! End-to-end tests for the request orchestration: validate → analyze → merge.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use pipeline_analyzer::error::PipelineError;
use pipeline_analyzer::parse;
use pipeline_analyzer::server::{ResponseDetails, process_pipeline};

#[test]
fn linear_pipeline_response() {
    let pipeline = parse::parse(include_str!("fixtures/linear_pipeline.json")).unwrap();
    let log = RecordingLog::default();
    let response = process_pipeline(&pipeline, &log).expect("Should analyze");

    insta::assert_json_snapshot!(response, @r#"
    {
      "num_nodes": 4,
      "num_edges": 3,
      "is_dag": true,
      "message": "Valid DAG structure",
      "details": {
        "node_types": {
          "customInput": 1,
          "customOutput": 1,
          "llm": 1,
          "text": 1
        },
        "isolated_nodes": [],
        "entry_points": [
          "customInput-1"
        ],
        "exit_points": [
          "customOutput-1"
        ],
        "cycles": [],
        "total_connections": 3
      }
    }
    "#);

    assert_eq!(
        log.events(),
        vec!["received nodes=4 edges=3", "analyzed is_dag=true"]
    );
}

#[test]
fn cyclic_pipeline_reports_cycle_members() {
    let pipeline = parse::parse(include_str!("fixtures/cyclic_pipeline.json")).unwrap();
    let response = process_pipeline(&pipeline, &RecordingLog::default()).unwrap();

    assert!(!response.is_dag);
    assert_eq!(response.message, "Contains cycles - not a DAG");
    let details = response.analysis().expect("Should carry analysis details");
    assert!(details.entry_points.is_empty());
    assert!(details.exit_points.is_empty());
    assert_eq!(details.cycles, vec![ids(&["conditional-1", "filter-1", "math-1"])]);
}

#[test]
fn mixed_components_pipeline() {
    let pipeline = parse::parse(include_str!("fixtures/mixed_components.json")).unwrap();
    let response = process_pipeline(&pipeline, &RecordingLog::default()).unwrap();

    assert_eq!(response.num_nodes, 5);
    assert_eq!(response.num_edges, 3);
    assert!(!response.is_dag);
    assert_eq!(response.message, "Contains cycles - not a DAG | 1 isolated node");

    let details = response.analysis().unwrap();
    assert_eq!(details.isolated_nodes, ids(&["text-1"]));
    assert_eq!(details.entry_points, ids(&["customInput-1"]));
    assert_eq!(details.exit_points, ids(&["llm-1"]));
    assert_eq!(details.cycles, vec![ids(&["api-1", "timer-1"])]);
    assert_eq!(details.total_connections, 3);
}

#[test]
fn empty_pipeline_short_circuits_with_warning() {
    let pipeline = parse::parse(include_str!("fixtures/empty_pipeline.json")).unwrap();
    let log = RecordingLog::default();
    let response = process_pipeline(&pipeline, &log).unwrap();

    assert_eq!(response.num_nodes, 0);
    assert_eq!(response.num_edges, 1);
    assert!(response.is_dag);
    assert_eq!(response.message, "Empty pipeline - no nodes provided");
    assert_eq!(
        response.details,
        ResponseDetails::Warning {
            warning: "Pipeline contains no nodes".into()
        }
    );
    assert_eq!(log.events(), vec!["received nodes=0 edges=1", "analyzed is_dag=true"]);
}

#[test]
fn dangling_edges_are_rejected_before_analysis() {
    let pipeline = parse::parse(include_str!("fixtures/dangling_edge.json")).unwrap();
    let log = RecordingLog::default();
    let err = process_pipeline(&pipeline, &log).unwrap_err();

    assert_eq!(
        err,
        PipelineError::DanglingEdgeReference {
            edge_ids: ids(&["e2", "e3"]),
        }
    );
    assert_eq!(log.events(), vec!["received nodes=2 edges=3", "rejected V001"]);
}

#[test]
fn isolated_nodes_in_summary() {
    let p = pipeline(&["a", "b", "c", "d"], &[("a", "b")]);
    let response = process_pipeline(&p, &RecordingLog::default()).unwrap();
    assert_eq!(response.message, "Valid DAG structure | 2 isolated nodes");
    assert_eq!(response.analysis().unwrap().isolated_nodes, ids(&["c", "d"]));
}
