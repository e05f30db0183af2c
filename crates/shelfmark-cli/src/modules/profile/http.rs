use std::fs;
use std::path::Path;

use shelfmark_client::{ApiRequest, MultipartPart};
use shelfmark_core::{endpoints, Profile, ProfileUpdate};

use crate::modules::system::CommandContext;

pub(crate) async fn fetch_profile(ctx: &CommandContext<'_>) -> anyhow::Result<Profile> {
    Ok(ctx.api.get_json(endpoints::PROFILE).await?)
}

pub(crate) async fn update_profile(
    ctx: &CommandContext<'_>,
    update: &ProfileUpdate,
) -> anyhow::Result<Profile> {
    let request = ApiRequest::patch(endpoints::PROFILE).multipart(profile_parts(update)?);
    Ok(ctx.api.send_json(&request).await?)
}

pub(crate) fn profile_parts(update: &ProfileUpdate) -> anyhow::Result<Vec<MultipartPart>> {
    let mut parts = Vec::new();
    if let Some(bio) = &update.bio {
        parts.push(MultipartPart::Text {
            name: "bio".to_string(),
            value: bio.clone(),
        });
    }
    if let Some(genre) = &update.favorite_genre {
        parts.push(MultipartPart::Text {
            name: "favorite_genre".to_string(),
            value: genre.clone(),
        });
    }
    if let Some(path) = &update.avatar {
        let data = fs::read(path)
            .map_err(|err| anyhow::anyhow!("failed to read avatar {}: {err}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("avatar")
            .to_string();
        parts.push(MultipartPart::File {
            name: "avatar".to_string(),
            file_name,
            content_type: image_content_type(path).map(str::to_string),
            data,
        });
    }
    Ok(parts)
}

fn image_content_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
