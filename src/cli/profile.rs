//! Profile CLI commands
//!
//! The profile image is sent inline as a `data:` URI built from a local file.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::Subcommand;

use super::CommandContext;
use crate::error::{PfmError, PfmResult};
use crate::models::user::SUPPORTED_CURRENCIES;
use crate::models::ProfileUpdate;
use crate::session::Session;

/// Largest image accepted for upload
const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the signed-in user's profile
    Show,

    /// Update name, currency, notifications or picture
    Update {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Currency code (INR, USD, EUR or any ISO 4217 code)
        #[arg(short, long)]
        currency: Option<String>,

        /// Turn notifications on or off
        #[arg(long)]
        notifications: Option<bool>,

        /// Path to a new profile picture
        #[arg(long, conflicts_with = "remove_image")]
        image: Option<std::path::PathBuf>,

        /// Remove the current profile picture
        #[arg(long)]
        remove_image: bool,
    },
}

/// MIME type for an image file, judged by its extension
fn image_mime(path: &Path) -> PfmResult<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "svg" => Ok("image/svg+xml"),
        _ => Err(PfmError::Validation(format!(
            "Unsupported image type '{}'. Use png, jpg, gif, webp or svg",
            path.display()
        ))),
    }
}

/// Read an image file into a `data:<mime>;base64,...` URI
pub fn encode_image_data_uri(path: &Path) -> PfmResult<String> {
    let mime = image_mime(path)?;

    let size = fs::metadata(path)
        .map_err(|e| PfmError::Io(format!("Cannot read {}: {}", path.display(), e)))?
        .len();
    if size > MAX_IMAGE_BYTES {
        return Err(PfmError::Validation(format!(
            "Image is {} bytes; the limit is {} bytes",
            size, MAX_IMAGE_BYTES
        )));
    }

    let bytes = fs::read(path)
        .map_err(|e| PfmError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Handle a profile command
pub async fn handle_profile_command(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    cmd: ProfileCommands,
) -> PfmResult<()> {
    let scope = ctx.scope();
    let user = scope.run(session.ensure_authenticated()).await?;

    match cmd {
        ProfileCommands::Show => {
            println!("Name:          {}", user.name);
            println!("Email:         {}", user.email);
            println!("Currency:      {}", user.currency);
            println!(
                "Notifications: {}",
                if user.notifications { "on" } else { "off" }
            );
            println!(
                "Picture:       {}",
                if user.profile_image.is_some() {
                    "set"
                } else {
                    "none"
                }
            );
        }

        ProfileCommands::Update {
            name,
            currency,
            notifications,
            image,
            remove_image,
        } => {
            let mut update = ProfileUpdate::from_user(user);

            if let Some(name) = name {
                update.name = name.trim().to_string();
            }
            if let Some(currency) = currency {
                let code = currency.trim().to_ascii_uppercase();
                if !SUPPORTED_CURRENCIES.contains(&code.as_str()) {
                    tracing::info!(%code, "using a currency outside the offered list");
                }
                update.currency = code;
            }
            if let Some(notifications) = notifications {
                update.notifications = notifications;
            }
            if let Some(path) = image {
                update.profile_image = encode_image_data_uri(&path)?;
            } else if remove_image {
                update.profile_image.clear();
            }

            let user = scope.run(session.update_profile(&update)).await?;
            println!("Profile updated: {} ({})", user.name, user.currency);
        }
    }

    Ok(())
}
