use super::svs_api_client::{MediaGroup, MediaInstance, SvsVisualization};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
    Other,
}

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mpg", "mpeg"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tif", "tiff", "webp"];

impl MediaInstance {
    /// Kind from `media_type` when it is recognised, else from the URL extension.
    pub fn kind(&self) -> MediaKind {
        match self.media_type.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("movie") | Some("video") => return MediaKind::Video,
            Some("image") => return MediaKind::Image,
            _ => {}
        }

        let url = self.url.as_deref().unwrap_or_default();
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let file = path.rsplit('/').next().unwrap_or_default();
        let Some((_, ext)) = file.rsplit_once('.') else {
            return MediaKind::Other;
        };
        let ext = ext.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Image
        } else {
            MediaKind::Other
        }
    }
}

/// A media instance with a url, together with the group it was found in.
#[derive(Debug, Clone, Copy)]
pub struct SelectedMedia<'a> {
    pub group: &'a MediaGroup,
    pub instance: &'a MediaInstance,
    url: &'a str,
}

impl SelectedMedia<'_> {
    pub fn url(&self) -> String {
        self.url.to_string()
    }

    pub fn alt_text(&self) -> Option<String> {
        non_empty(self.instance.alt_text.as_deref())
    }

    /// Description of the owning group, falling back to the alt text.
    pub fn caption(&self) -> Option<String> {
        non_empty(self.group.description.as_deref()).or_else(|| self.alt_text())
    }
}

impl SvsVisualization {
    /// Instances of `kind` across all media groups, in document order.
    /// Instances without a url are skipped.
    pub fn media(&self, kind: MediaKind) -> impl Iterator<Item = SelectedMedia<'_>> {
        self.media_groups.iter().flat_map(move |group| {
            group
                .items
                .iter()
                .filter_map(|item| item.instance.as_ref())
                .filter(move |instance| instance.kind() == kind)
                .filter_map(move |instance| {
                    let url = instance.url.as_deref()?;
                    Some(SelectedMedia {
                        group,
                        instance,
                        url,
                    })
                })
        })
    }

    pub fn nth_media(&self, kind: MediaKind, n: usize) -> Option<SelectedMedia<'_>> {
        self.media(kind).nth(n)
    }

    pub fn first_group_description(&self) -> Option<String> {
        self.media_groups
            .iter()
            .find_map(|g| non_empty(g.description.as_deref()))
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
