//! Skip catalog lookup by location.
//!
//! # Design
//! The fetch is split like every other call on `SkipClient`: the host
//! executes what `build_fetch_skips` returns and passes the outcome to
//! `parse_fetch_skips`. An empty catalog is an error at this layer; callers
//! never see `Ok` with zero options.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::client::SkipClient;
use crate::error::SkipError;
use crate::http::{HttpOutcome, HttpRequest};
use crate::types::SkipOption;

pub const BY_LOCATION_PATH: &str = "/skips/by-location";

impl SkipClient {
    pub fn build_fetch_skips(&self, postcode: &str, area: Option<&str>) -> Result<HttpRequest, SkipError> {
        let postcode = postcode.trim();
        if postcode.is_empty() {
            warn!("skip lookup rejected: empty postcode");
            return Err(SkipError::Application("A postcode is required to look up skips.".to_string()));
        }
        let area = area.map(str::trim).filter(|a| !a.is_empty());
        let request = self.build_get(BY_LOCATION_PATH, &[("postcode", postcode.into()), ("area", area.into())])?;
        Ok(request)
    }

    pub fn parse_fetch_skips(&self, outcome: HttpOutcome) -> Result<Vec<SkipOption>, SkipError> {
        let result = self
            .parse_json::<Option<Vec<SkipOption>>>(outcome)
            .and_then(|payload| match payload {
                Some(options) if !options.is_empty() => Ok(options),
                _ => Err(SkipError::EmptyResult),
            })
            .and_then(|options| {
                validate_catalog(&options)?;
                Ok(options)
            });

        match &result {
            Ok(options) => info!(count = options.len(), "fetched skip catalog"),
            Err(e) => warn!(error = %e.user_message(), "error fetching skip data"),
        }
        result
    }
}

/// Reject catalogs that break the pricing or identity invariants.
pub fn validate_catalog(options: &[SkipOption]) -> Result<(), SkipError> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.id) {
            return Err(SkipError::Application(format!("Duplicate skip id {} in catalog.", option.id)));
        }
        if !(option.price_before_vat >= 0.0) {
            return Err(SkipError::Application(format!(
                "Skip {} has an invalid price ({}).",
                option.id, option.price_before_vat
            )));
        }
        if !(option.vat >= 0.0) {
            return Err(SkipError::Application(format!(
                "Skip {} has an invalid VAT rate ({}).",
                option.id, option.vat
            )));
        }
    }
    Ok(())
}
