pub mod json_api;

pub use json_api::{
    compute_winners_json, resolve_axis_json, resolve_owners_json, AxisRequest, AxisResponse,
    OwnersRequest, OwnersResponse, WinnersRequest, WinnersResponse,
};
