//! Pure reducers over the client-local photo and tag projections.
//!
//! Controllers apply these only after the backend confirmed the mutation, so
//! the local list tracks the last known server state without re-fetching.

use dagbok_client::domain::{Photo, Tag};

/// Append a confirmed upload, preserving the order of existing photos.
pub fn append_photo(mut photos: Vec<Photo>, new: Photo) -> Vec<Photo> {
    photos.push(new);
    photos
}

/// Drop the photo with the given id; everything else is untouched.
pub fn remove_photo(photos: Vec<Photo>, photo_id: &str) -> Vec<Photo> {
    photos.into_iter().filter(|p| p.id != photo_id).collect()
}

/// Append a confirmed tag. No name deduplication here: the catalog shows
/// whatever the backend handed back.
pub fn append_tag(mut tags: Vec<Tag>, new: Tag) -> Vec<Tag> {
    tags.push(new);
    tags
}

/// Drop the tag with the given id.
pub fn remove_tag(tags: Vec<Tag>, tag_id: &str) -> Vec<Tag> {
    tags.into_iter().filter(|t| t.id != tag_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            entry_id: None,
            url: format!("http://x/{}.jpg", id),
            description: None,
        }
    }

    fn tag(id: &str, name: &str) -> Tag {
        Tag {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn append_photo_keeps_existing_order() {
        let photos = vec![photo("p1"), photo("p2")];
        let photos = append_photo(photos, photo("p3"));
        let ids: Vec<_> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
    }

    #[test]
    fn remove_photo_only_affects_matching_id() {
        let photos = vec![photo("p1"), photo("p2"), photo("p3")];
        let photos = remove_photo(photos, "p2");
        let ids: Vec<_> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p3"]);
    }

    #[test]
    fn remove_photo_with_unknown_id_is_a_noop() {
        let photos = vec![photo("p1")];
        let photos = remove_photo(photos, "p9");
        assert_eq!(photos.len(), 1);
    }

    #[test]
    fn append_tag_does_not_deduplicate_names() {
        let tags = vec![tag("t1", "travel")];
        let tags = append_tag(tags, tag("t2", "travel"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, tags[1].name);
    }

    #[test]
    fn remove_tag_drops_by_id() {
        let tags = vec![tag("t1", "travel"), tag("t2", "food")];
        let tags = remove_tag(tags, "t1");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, "t2");
    }
}
