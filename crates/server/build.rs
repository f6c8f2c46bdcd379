use tonic_build::manual::{Builder, Method, Service};

/// RPC name, generated method name, request and response message names.
const METHODS: [(&str, &str, &str, &str); 4] = [
    ("ListServices", "list_services", "ListServicesRequest", "ListServicesResponse"),
    ("GetService", "get_service", "GetServiceRequest", "GetServiceResponse"),
    ("GetServiceVersions", "get_service_versions", "GetServiceVersionsRequest", "GetServiceVersionsResponse"),
    ("HealthCheck", "health_check", "HealthCheckRequest", "HealthCheckResponse"),
];

fn main() {
    // Messages are hand-written prost structs in src/grpc/proto.rs, so no protoc is needed.
    let mut service = Service::builder().name("CatalogService").package("catalog.v1");
    for (route, name, input, output) in METHODS {
        service = service.method(
            Method::builder()
                .name(name)
                .route_name(route)
                .input_type(format!("crate::grpc::proto::{input}"))
                .output_type(format!("crate::grpc::proto::{output}"))
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        );
    }
    Builder::new().compile(&[service.build()]);
    println!("cargo:rerun-if-changed=build.rs");
}
