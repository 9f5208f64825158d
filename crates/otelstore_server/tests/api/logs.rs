use crate::common::{setup_test, str_kv};
use opentelemetry_proto::tonic::collector::logs::v1::ExportLogsServiceRequest;
use opentelemetry_proto::tonic::common::v1::{any_value, AnyValue};
use opentelemetry_proto::tonic::logs::v1::{LogRecord, ResourceLogs, ScopeLogs};
use otelstore_types::{exp_identifier, AttributeValue, EXP_IDENTIFIER};
use tonic::Code;

fn log_record(trace_id: Vec<u8>, span_id: Vec<u8>) -> LogRecord {
    LogRecord {
        time_unix_nano: 1_700_000_000_000_000_000,
        severity_text: "ERROR".to_string(),
        body: Some(AnyValue {
            value: Some(any_value::Value::StringValue("boom".to_string())),
        }),
        attributes: vec![str_kv("code.function", "handle")],
        trace_id,
        span_id,
        ..Default::default()
    }
}

fn request(log_records: Vec<LogRecord>) -> ExportLogsServiceRequest {
    ExportLogsServiceRequest {
        resource_logs: vec![ResourceLogs {
            scope_logs: vec![ScopeLogs {
                log_records,
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}

#[tokio::test]
async fn test_grpc_export_logs_drops_untraced() {
    let helper = setup_test().await;
    let mut client = helper.logs_client().await;

    let response = client
        .export(request(vec![
            log_record(vec![0xAA; 16], vec![0xBB; 8]),
            log_record(vec![0xAA; 16], vec![]),
            log_record(vec![], vec![]),
        ]))
        .await
        .unwrap()
        .into_inner();

    // dropped records are never reported back
    assert!(response.partial_success.is_none());

    let logs = helper.writer.logs.lock().unwrap();
    assert_eq!(logs.len(), 1);

    let log = &logs[0];
    assert_eq!(log.severity, "ERROR");
    assert_eq!(log.body.as_deref(), Some("boom"));
    assert_eq!(
        log.attributes[EXP_IDENTIFIER],
        AttributeValue::String(exp_identifier(
            &"aa".repeat(16),
            &"bb".repeat(8),
            1_700_000_000_000_000_000
        ))
    );
}

#[tokio::test]
async fn test_grpc_export_malformed_log_is_rejected() {
    let helper = setup_test().await;
    let mut client = helper.logs_client().await;

    let status = client
        .export(request(vec![log_record(vec![0xAA; 5], vec![0xBB; 8])]))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(helper.writer.logs.lock().unwrap().is_empty());
}
