use crate::common::setup_test;
use otelstore_tonic::{LOGS_SERVICE_NAME, TRACE_SERVICE_NAME};

#[tokio::test]
async fn test_reflection_v1_lists_services() {
    use tonic_reflection::pb::v1::server_reflection_client::ServerReflectionClient;
    use tonic_reflection::pb::v1::server_reflection_request::MessageRequest;
    use tonic_reflection::pb::v1::server_reflection_response::MessageResponse;
    use tonic_reflection::pb::v1::ServerReflectionRequest;

    let helper = setup_test().await;
    let mut client = ServerReflectionClient::new(
        tonic::transport::Endpoint::new(helper.url())
            .unwrap()
            .connect()
            .await
            .unwrap(),
    );

    let request = ServerReflectionRequest {
        host: String::new(),
        message_request: Some(MessageRequest::ListServices(String::new())),
    };

    let mut inbound = client
        .server_reflection_info(tokio_stream::iter(vec![request]))
        .await
        .unwrap()
        .into_inner();

    let response = inbound.message().await.unwrap().unwrap();
    let services: Vec<String> = match response.message_response {
        Some(MessageResponse::ListServicesResponse(list)) => {
            list.service.into_iter().map(|s| s.name).collect()
        }
        other => panic!("unexpected reflection response: {other:?}"),
    };

    assert!(services.contains(&TRACE_SERVICE_NAME.to_string()));
    assert!(services.contains(&LOGS_SERVICE_NAME.to_string()));
    assert!(services.contains(&"grpc.reflection.v1.ServerReflection".to_string()));
}

#[tokio::test]
async fn test_reflection_v1alpha_lists_services() {
    use tonic_reflection::pb::v1alpha::server_reflection_client::ServerReflectionClient;
    use tonic_reflection::pb::v1alpha::server_reflection_request::MessageRequest;
    use tonic_reflection::pb::v1alpha::server_reflection_response::MessageResponse;
    use tonic_reflection::pb::v1alpha::ServerReflectionRequest;

    let helper = setup_test().await;
    let mut client = ServerReflectionClient::new(
        tonic::transport::Endpoint::new(helper.url())
            .unwrap()
            .connect()
            .await
            .unwrap(),
    );

    let request = ServerReflectionRequest {
        host: String::new(),
        message_request: Some(MessageRequest::ListServices(String::new())),
    };

    let mut inbound = client
        .server_reflection_info(tokio_stream::iter(vec![request]))
        .await
        .unwrap()
        .into_inner();

    let response = inbound.message().await.unwrap().unwrap();
    let services: Vec<String> = match response.message_response {
        Some(MessageResponse::ListServicesResponse(list)) => {
            list.service.into_iter().map(|s| s.name).collect()
        }
        other => panic!("unexpected reflection response: {other:?}"),
    };

    assert!(services.contains(&TRACE_SERVICE_NAME.to_string()));
    assert!(services.contains(&LOGS_SERVICE_NAME.to_string()));
}
