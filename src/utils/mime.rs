/// Content type for an image path, judged by its extension alone.
///
/// Only the last `/`-separated segment is inspected and the extension is
/// matched case-sensitively. Unknown or missing extensions give `""`.
pub fn content_type_from_file_path(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or("");
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("");

    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "",
    }
}
