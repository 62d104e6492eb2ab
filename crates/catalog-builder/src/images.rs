/// Image discovery for club folders under the public image root.
///
/// A missing folder yields no images. Files whose name contains "main" sort first, the rest
/// follow by name.
use std::cmp::Ordering;
use std::path::Path;

use tracing::warn;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

pub fn is_image_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

fn is_main(file_name: &str) -> bool {
    file_name.to_lowercase().contains("main")
}

/// "main" files first; within each group case-insensitive name order, bytes break ties.
pub fn compare_image_names(a: &str, b: &str) -> Ordering {
    is_main(b)
        .cmp(&is_main(a))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

pub fn order_image_names(names: &mut [String]) {
    names.sort_by(|a, b| compare_image_names(a, b));
}

/// Returns public paths `<base>/<folder>/<file>`, or `None` when the folder does not exist.
pub fn discover_images(
    image_root: &Path,
    folder: &str,
    public_base: &str,
) -> std::io::Result<Option<Vec<String>>> {
    let dir = image_root.join(folder);
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(dir = %dir.display(), "skipping image with non-UTF-8 file name");
            continue;
        };
        if is_image_file(&name) {
            names.push(name);
        }
    }
    order_image_names(&mut names);

    let base = public_base.trim_end_matches('/');
    Ok(Some(
        names
            .into_iter()
            .map(|name| format!("{base}/{folder}/{name}"))
            .collect(),
    ))
}
