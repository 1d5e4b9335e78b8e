// This file is part of the Holograph SDK.
//
// The Holograph SDK is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// The Holograph SDK is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with the Holograph SDK.
// If not, see https://www.gnu.org/licenses/.

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use holograph_types::HolographConfig;

/// Resolve the SDK config from the hierarchy of
/// - ENV (`HOLOGRAPH__*`, `__` separates nested keys)
/// - file
/// - defaults
pub fn load_config(file: Option<&str>) -> anyhow::Result<HolographConfig> {
    let default =
        serde_json::to_string(&HolographConfig::default()).context("should serialize defaults")?;
    let mut builder = Config::builder().add_source(File::from_str(&default, FileFormat::Json));
    if let Some(file) = file {
        builder = builder.add_source(File::with_name(file));
    }

    let config: HolographConfig = builder
        .add_source(
            Environment::with_prefix("HOLOGRAPH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("should build config")?
        .try_deserialize()
        .context("should deserialize config")?;

    config.validate()?;
    Ok(config)
}
