//! Tests for share-link normalization behavior.

use drivelink::{extract_file_id, normalize, LinkNormalizer};

mod file_view_links {
    use super::*;

    #[test]
    fn basic_file_view_url() {
        let url = "https://drive.google.com/file/d/1abc123XYZ/view";
        assert_eq!(
            normalize(url),
            "https://drive.google.com/uc?export=view&id=1abc123XYZ"
        );
    }

    #[test]
    fn file_view_url_with_share_suffix() {
        let url = "https://drive.google.com/file/d/1FCe2JjUYedJ2aKrZx2yLab3KF24Bd8pd/view?usp=drive_link";
        assert_eq!(
            normalize(url),
            "https://drive.google.com/uc?export=view&id=1FCe2JjUYedJ2aKrZx2yLab3KF24Bd8pd"
        );
    }

    #[test]
    fn file_url_without_view_suffix() {
        let url = "https://drive.google.com/file/d/1abc123XYZ";
        assert_eq!(
            normalize(url),
            "https://drive.google.com/uc?export=view&id=1abc123XYZ"
        );
    }

    #[test]
    fn identifier_with_hyphen_and_underscore() {
        let url = "https://drive.google.com/file/d/abc-123_XYZ/view";
        assert_eq!(
            normalize(url),
            "https://drive.google.com/uc?export=view&id=abc-123_XYZ"
        );
    }
}

mod query_id_links {
    use super::*;

    #[test]
    fn open_url() {
        let url = "https://drive.google.com/open?id=1abc123XYZ";
        assert_eq!(
            normalize(url),
            "https://drive.google.com/uc?export=view&id=1abc123XYZ"
        );
    }

    #[test]
    fn uc_url() {
        let url = "https://drive.google.com/uc?id=1abc123XYZ";
        assert_eq!(
            normalize(url),
            "https://drive.google.com/uc?export=view&id=1abc123XYZ"
        );
    }

    #[test]
    fn query_shape_matches_path_shape_for_same_id() {
        let from_path = normalize("https://drive.google.com/file/d/1abc123XYZ/view");
        let from_query = normalize("https://drive.google.com/open?id=1abc123XYZ");
        assert_eq!(from_path, from_query);
    }
}

mod passthrough {
    use super::*;

    #[test]
    fn plain_text() {
        assert_eq!(normalize("not a url at all"), "not a url at all");
    }

    #[test]
    fn empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_drive_url() {
        let url = "https://example.com/images/product.png?size=large";
        assert_eq!(normalize(url), url);
    }

    #[test]
    fn regex_metacharacters() {
        let input = "((( [a-z]+ ))) \\ ^$ https://example.com";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn path_segment_without_identifier() {
        assert_eq!(normalize("xyz/d/"), "xyz/d/");
    }

    #[test]
    fn proxied_variant_also_passes_through() {
        let normalizer = LinkNormalizer::proxied();
        assert_eq!(normalizer.normalize("not a url at all"), "not a url at all");
        assert_eq!(normalizer.normalize(""), "");
    }
}

mod first_match_wins {
    use super::*;

    #[test]
    fn path_shape_before_query_shape() {
        assert_eq!(
            normalize("x/d/AAA?id=BBB"),
            "https://drive.google.com/uc?export=view&id=AAA"
        );
    }

    #[test]
    fn query_shape_before_path_shape() {
        assert_eq!(
            normalize("x?id=BBB/d/AAA"),
            "https://drive.google.com/uc?export=view&id=BBB"
        );
    }
}

mod proxied {
    use super::*;

    #[test]
    fn wraps_canonical_url_behind_proxy_path() {
        let normalizer = LinkNormalizer::proxied();
        assert_eq!(
            normalizer.normalize("https://drive.google.com/file/d/1abc123/view"),
            "/api/proxy-image?url=https%3A%2F%2Fdrive.google.com%2Fuc%3Fexport%3Dview%26id%3D1abc123"
        );
    }

    #[test]
    fn custom_proxy_path() {
        let normalizer = LinkNormalizer::proxied_at("/relay/image");
        assert_eq!(
            normalizer.normalize("https://drive.google.com/open?id=1abc123"),
            "/relay/image?url=https%3A%2F%2Fdrive.google.com%2Fuc%3Fexport%3Dview%26id%3D1abc123"
        );
    }

    #[test]
    fn identifier_survives_encoding_untouched() {
        let normalizer = LinkNormalizer::proxied();
        let out = normalizer.normalize("https://drive.google.com/file/d/abc-123_XYZ/view");
        assert!(out.ends_with("id%3Dabc-123_XYZ"));
    }
}

mod idempotence {
    use super::*;

    #[test]
    fn canonical_output_is_stable() {
        let once = normalize("https://drive.google.com/file/d/1abc123XYZ/view");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn proxied_output_is_stable() {
        let normalizer = LinkNormalizer::proxied();
        let once = normalizer.normalize("https://drive.google.com/file/d/1abc123XYZ/view");
        // The encoded url= parameter embeds id%3D..., which must not re-match.
        assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn neither_output_still_contains_a_share_shape() {
        let direct = normalize("https://drive.google.com/file/d/1abc123XYZ/view");
        let proxied = LinkNormalizer::proxied().normalize("https://drive.google.com/open?id=1abc123XYZ");
        assert!(extract_file_id(&direct).is_err());
        assert!(extract_file_id(&proxied).is_err());
    }
}
