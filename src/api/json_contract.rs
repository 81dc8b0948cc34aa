use serde::{Deserialize, Serialize};

use crate::core::CurveGeometry;
use crate::error::{ChartError, ChartResult};

use super::LineChartOptions;

pub const CURVE_GEOMETRY_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGeometryJsonContractV1 {
    pub schema_version: u32,
    pub geometry: CurveGeometry,
}

impl CurveGeometry {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CurveGeometryJsonContractV1 {
            schema_version: CURVE_GEOMETRY_JSON_SCHEMA_V1,
            geometry: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize geometry contract v1: {e}"))
        })
    }

    /// Accepts either a bare geometry document or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(geometry) = serde_json::from_str::<CurveGeometry>(input) {
            return Ok(geometry);
        }
        let payload: CurveGeometryJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse geometry json payload: {e}"))
        })?;
        if payload.schema_version != CURVE_GEOMETRY_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported geometry schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.geometry)
    }
}

impl LineChartOptions {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options: {e}"))
        })
    }

    /// Parses and validates options; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options json: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }
}
