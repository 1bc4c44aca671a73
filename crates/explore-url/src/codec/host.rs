use explore_model::HostSelector;

use super::QueryCodec;
use crate::query::QueryParams;

pub const HOST_PARAM: &str = "host";

/// Reads and writes the comma-joined `host` parameter. The default selection
/// is written as the absence of the parameter.
#[derive(Debug, Clone, Default)]
pub struct HostCodec {
    default: HostSelector,
}

impl HostCodec {
    pub fn new(default: HostSelector) -> Self {
        Self { default }
    }
}

impl QueryCodec for HostCodec {
    type Value = HostSelector;

    fn read(&self, params: &QueryParams) -> HostSelector {
        match params.get(HOST_PARAM) {
            Some(raw) if raw.split(',').any(|host| !host.trim().is_empty()) => {
                HostSelector::new(raw.split(','))
            }
            _ => self.default.clone(),
        }
    }

    fn write(&self, value: &HostSelector, params: &mut QueryParams) {
        params.delete(HOST_PARAM);
        if *value != self.default {
            params.set(HOST_PARAM, value.hosts().join(","));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_is_elided() {
        let codec = HostCodec::default();
        let mut params = QueryParams::parse("host=Bat&a=1");
        codec.write(&HostSelector::human(), &mut params);
        assert_eq!(params.to_string(), "a=1");
        assert_eq!(codec.read(&params), HostSelector::human());
    }

    #[test]
    fn explicit_default_decodes_to_default() {
        let codec = HostCodec::default();
        assert!(codec.read(&QueryParams::parse("host=Human")).is_default());
        assert!(codec.read(&QueryParams::parse("host=")).is_default());
        assert!(codec.read(&QueryParams::parse("host=,")).is_default());
    }

    #[test]
    fn host_order_does_not_matter() {
        let codec = HostCodec::default();
        assert_eq!(
            codec.read(&QueryParams::parse("host=Human,Bat")),
            codec.read(&QueryParams::parse("host=Bat,Human"))
        );
    }

    #[test]
    fn non_default_host_is_written() {
        let codec = HostCodec::default();
        let mut params = QueryParams::new();
        codec.write(&HostSelector::new(["Human", "Bat"]), &mut params);
        assert_eq!(params.to_string(), "host=Human%2CBat");
    }
}
