//! YAML profile files

use std::path::Path;

use color_eyre::eyre::WrapErr;
use communal_core::model::MunicipalProfile;

/// Parse a profile from YAML
pub fn from_yaml(yaml: &str) -> Result<MunicipalProfile, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

/// Serialize a profile to YAML
pub fn to_yaml(profile: &MunicipalProfile) -> Result<String, serde_saphyr::ser::Error> {
    serde_saphyr::to_string(profile)
}

/// Read and validate a profile file
pub fn load_profile(path: &Path) -> color_eyre::Result<MunicipalProfile> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read profile {}", path.display()))?;
    let profile = from_yaml(&content)
        .wrap_err_with(|| format!("Failed to parse profile {}", path.display()))?;
    profile
        .validate()
        .wrap_err_with(|| format!("Profile {} is invalid", path.display()))?;

    tracing::info!(
        municipality = %profile.name,
        metrics = profile.metrics.len(),
        rules = profile.overlay.len(),
        "Profile loaded"
    );
    Ok(profile)
}

/// Write a profile to `path` for hand editing
pub fn dump_profile(profile: &MunicipalProfile, path: &Path) -> color_eyre::Result<()> {
    let yaml = to_yaml(profile).wrap_err("Failed to serialize profile")?;
    std::fs::write(path, yaml)
        .wrap_err_with(|| format!("Failed to write profile {}", path.display()))?;
    tracing::info!(municipality = %profile.name, path = %path.display(), "Profile dumped");
    Ok(())
}
