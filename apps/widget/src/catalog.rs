//! Services offered in the picker.

use anyhow::{bail, Context};
use std::collections::HashSet;
use std::path::Path;

use crate::models::Service;

/// Catalog used when no `SERVICES_FILE` is configured.
pub fn default_catalog() -> Vec<Service> {
    [
        ("Soch olish", "haircut", 50_000, 1),
        ("Soqol olish", "beard", 30_000, 1),
        ("Soch va soqol", "combo", 70_000, 2),
        ("Soch bo'yash", "coloring", 120_000, 2),
        ("Yuz parvarishi", "face_care", 80_000, 1),
    ]
    .into_iter()
    .map(|(name, id, price, hours)| Service {
        name: name.into(),
        service: id.into(),
        price,
        duration_hours: hours,
    })
    .collect()
}

/// Read a JSON array of services from `path`.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Service>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading services file {}", path.display()))?;
    let services: Vec<Service> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing services file {}", path.display()))?;
    validate_catalog(&services)?;
    tracing::info!("loaded {} services from {}", services.len(), path.display());
    Ok(services)
}

pub fn validate_catalog(services: &[Service]) -> anyhow::Result<()> {
    if services.is_empty() {
        bail!("service catalog is empty");
    }
    let mut seen = HashSet::new();
    for s in services {
        if s.name.trim().is_empty() || s.service.trim().is_empty() {
            bail!("service with empty name or id: {:?}", s);
        }
        if s.duration_hours < 1 {
            bail!("service {} must last at least 1 hour", s.service);
        }
        if !seen.insert(s.service.as_str()) {
            bail!("duplicate service id {}", s.service);
        }
    }
    Ok(())
}

/// Look up a service by id.
pub fn find<'a>(catalog: &'a [Service], id: &str) -> Option<&'a Service> {
    catalog.iter().find(|s| s.service == id)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn svc(id: &str, hours: u32) -> Service {
        Service {
            name: id.into(),
            service: id.into(),
            price: 1000,
            duration_hours: hours,
        }
    }

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(validate_catalog(&default_catalog()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_catalog(&[]).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let err = validate_catalog(&[svc("a", 0)]).unwrap_err();
        assert!(err.to_string().contains("at least 1 hour"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let err = validate_catalog(&[svc("a", 1), svc("a", 2)]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_find() {
        let catalog = default_catalog();
        assert_eq!(find(&catalog, "beard").map(|s| s.price), Some(30_000));
        assert!(find(&catalog, "massage").is_none());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"name":"Soch olish","service":"haircut","price":60000,"duration":1}}]"#
        )
        .unwrap();

        let services = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].price, 60_000);
        assert_eq!(services[0].duration_hours, 1);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/services.json")).unwrap_err();
        assert!(err.to_string().contains("reading services file"));
    }
}
