//! OpenAPI document generated from the registry: one create and one fetch operation per kind.

use crate::config::{FieldType, Registry, ResourceKind};
use crate::routes::API_PREFIX;
use crate::state::AppState;
use axum::{extract::State, Json};
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::info::InfoBuilder;
use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathsBuilder};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{
    ArrayBuilder, ComponentsBuilder, KnownFormat, ObjectBuilder, Ref, Schema, SchemaFormat, Type,
};
use utoipa::openapi::{OpenApi, OpenApiBuilder, RefOr, Required};

const JSON: &str = "application/json";
const ERROR_SCHEMA: &str = "ErrorResponse";

fn scalar(ty: Type, format: Option<KnownFormat>) -> RefOr<Schema> {
    let builder = ObjectBuilder::new()
        .schema_type(ty)
        .format(format.map(SchemaFormat::KnownFormat));
    RefOr::T(Schema::Object(builder.build()))
}

fn array_of(items: RefOr<Schema>) -> RefOr<Schema> {
    RefOr::T(Schema::Array(ArrayBuilder::new().items(items).build()))
}

fn field_schema(ty: FieldType) -> RefOr<Schema> {
    let number = || scalar(Type::Number, Some(KnownFormat::Double));
    match ty {
        FieldType::Float => number(),
        FieldType::Integer => scalar(Type::Integer, Some(KnownFormat::Int64)),
        FieldType::Text => scalar(Type::String, None),
        FieldType::FloatArray => array_of(number()),
        FieldType::FloatMatrix => array_of(array_of(number())),
    }
}

/// Request payload schema; the record schema adds the store-assigned id.
fn kind_schema(kind: &ResourceKind, with_id: bool) -> RefOr<Schema> {
    let mut object = ObjectBuilder::new().schema_type(Type::Object);
    if with_id {
        object = object
            .property("id", scalar(Type::Integer, Some(KnownFormat::Int64)))
            .required("id");
    }
    for spec in kind.fields {
        object = object.property(spec.name, field_schema(spec.ty)).required(spec.name);
    }
    RefOr::T(Schema::Object(object.build()))
}

fn error_schema() -> RefOr<Schema> {
    let object = ObjectBuilder::new()
        .schema_type(Type::Object)
        .property("message", scalar(Type::String, None))
        .required("message")
        .property("error", scalar(Type::String, None));
    RefOr::T(Schema::Object(object.build()))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, RefOr::Ref(Ref::from_schema_name(ERROR_SCHEMA)))
}

fn operation_id(verb: &str, kind: &ResourceKind) -> String {
    format!("{}_{}", verb, kind.name().replace(['/', '-'], "_"))
}

pub fn openapi_document(registry: &Registry) -> OpenApi {
    let mut paths = PathsBuilder::new();
    for kind in registry.kinds() {
        let collection = format!("{}{}", API_PREFIX, kind.path());
        let create = OperationBuilder::new()
            .operation_id(Some(operation_id("create", kind)))
            .summary(Some(format!("Create {} record", kind.label)))
            .tag(kind.family)
            .request_body(Some(
                RequestBodyBuilder::new()
                    .content(JSON, ContentBuilder::new().schema(Some(kind_schema(kind, false))).build())
                    .required(Some(Required::True))
                    .build(),
            ))
            .response("201", json_response("Created", kind_schema(kind, true)))
            .response("400", error_response("Bad Request"))
            .response("500", error_response("Internal Server Error"));
        paths = paths.path(collection.clone(), PathItem::new(HttpMethod::Post, create));

        let id = ParameterBuilder::new()
            .name("id")
            .parameter_in(ParameterIn::Path)
            .required(Required::True)
            .schema(Some(scalar(Type::Integer, Some(KnownFormat::Int64))))
            .build();
        let fetch = OperationBuilder::new()
            .operation_id(Some(operation_id("get", kind)))
            .summary(Some(format!("Get {} record by id", kind.label)))
            .tag(kind.family)
            .parameter(id)
            .response("200", json_response("OK", kind_schema(kind, true)))
            .response("400", error_response("Bad Request"))
            .response("404", error_response("Not Found"))
            .response("500", error_response("Internal Server Error"));
        paths = paths.path(format!("{}/{{id}}", collection), PathItem::new(HttpMethod::Get, fetch));
    }

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(env!("CARGO_PKG_NAME"))
                .version(env!("CARGO_PKG_VERSION"))
                .description(Some(env!("CARGO_PKG_DESCRIPTION")))
                .build(),
        )
        .paths(paths.build())
        .components(Some(ComponentsBuilder::new().schema(ERROR_SCHEMA, error_schema()).build()))
        .build()
}

/// GET /openapi.json
pub async fn openapi(State(state): State<AppState>) -> Json<OpenApi> {
    Json(openapi_document(&state.registry))
}
