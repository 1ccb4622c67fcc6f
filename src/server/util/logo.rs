use url::Url;

const DRIVE_HOST: &str = "drive.google.com";

/// Normalizes a team logo link for direct display.
///
/// Google Drive sharing links (`/file/d/<id>/view` and `/open?id=<id>`) are rewritten
/// to the direct-view form `https://drive.google.com/uc?export=view&id=<id>`. Any
/// other value is returned trimmed but otherwise unchanged.
pub fn normalize_logo_url(raw: &str) -> String {
    let trimmed = raw.trim();

    match drive_file_id(trimmed).and_then(|id| direct_view_url(&id)) {
        Some(url) => url,
        None => trimmed.to_string(),
    }
}

fn direct_view_url(id: &str) -> Option<String> {
    let mut url = Url::parse(&format!("https://{}/uc", DRIVE_HOST)).ok()?;
    url.query_pairs_mut()
        .append_pair("export", "view")
        .append_pair("id", id);

    Some(url.into())
}

fn drive_file_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if url.host_str()? != DRIVE_HOST {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.collect();
    match segments.as_slice() {
        ["file", "d", id, ..] if !id.is_empty() => Some((*id).to_string()),
        ["open"] => url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, id)| id.into_owned())
            .filter(|id| !id.is_empty()),
        _ => None,
    }
}
