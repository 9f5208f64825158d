pub mod error;
pub mod grpc;
pub mod setup;
pub mod shutdown;
pub mod state;
