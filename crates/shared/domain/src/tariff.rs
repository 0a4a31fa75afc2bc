use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A pricing tier as served by the backend and by the embedded fallback.
///
/// `features` holds translation keys, not display strings; the client's
/// language layer resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TariffPlan {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub features: Vec<String>,
}
