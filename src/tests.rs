#[cfg(test)]
mod tests {

    mod hashtag_tests {
        use crate::TextValue;

        #[test]
        fn test_extract_hashtags_basic() {
            let value = TextValue::new("Hello #World #ai #ai");
            assert_eq!(value.extract_hashtags(false), vec!["#world", "#ai", "#ai"]);
        }

        #[test]
        fn test_extract_hashtags_padded() {
            let value = TextValue::new("Hello #World #ai #ai");
            assert_eq!(
                value.extract_hashtags(true),
                vec!["#world", "#ai---", "#ai---"]
            );
        }

        #[test]
        fn test_extract_hashtags_none() {
            let value = TextValue::new("no tags here");
            assert!(value.extract_hashtags(false).is_empty());
        }

        #[test]
        fn test_extract_hashtags_does_not_mutate() {
            let value = TextValue::new("#Mixed #CASE");
            let _ = value.extract_hashtags(true);
            assert_eq!(value.as_str(), "#Mixed #CASE");
        }
    }

    mod sanitize_tests {
        use crate::services::html::decode_entities;
        use crate::TextValue;

        #[test]
        fn test_sanitize_strips_and_escapes() {
            let mut value = TextValue::new("<b>hi</b> & 'quote'");
            value.sanitize(true);
            let out = value.as_str();
            assert_eq!(out, "hi &amp; &#039;quote&#039;");
            for raw in ['<', '>', '\'', '"'] {
                assert!(!out.contains(raw), "found {:?} in {}", raw, out);
            }
            assert_eq!(decode_entities(out), "hi & 'quote'");
        }

        #[test]
        fn test_sanitize_escapes_each_special_char() {
            for (input, expected) in [
                ("&", "&amp;"),
                ("\"", "&quot;"),
                ("'", "&#039;"),
                ("<", "&lt;"),
                (">", "&gt;"),
            ] {
                let mut value = TextValue::new(input);
                value.sanitize(true);
                assert_eq!(value.as_str(), expected, "{:?}", input);
            }
        }

        #[test]
        fn test_sanitize_comparison_and_quotes() {
            let mut value = TextValue::new("1 < 2 and \"x\" > y");
            value.sanitize(true);
            assert_eq!(value.as_str(), "1 &lt; 2 and &quot;x&quot; &gt; y");

            let mut once = TextValue::new("a < b");
            once.sanitize(true);
            assert_eq!(once.as_str(), "a &lt; b");
            let mut twice = once.clone();
            twice.sanitize(true);
            assert_eq!(twice, once);
        }

        #[test]
        fn test_sanitize_quoted_gt_in_attribute() {
            let mut value = TextValue::new(r#"<a title="x>y">t</a> done"#);
            value.sanitize(true);
            assert_eq!(value.as_str(), "t done");
        }

        #[test]
        fn test_sanitize_numeric_passthrough() {
            for input in ["12345", "-3.5", "1e3"] {
                let mut stripped = TextValue::new(input);
                stripped.sanitize(true);
                assert_eq!(stripped.as_str(), input);

                let mut kept = TextValue::new(input);
                kept.sanitize(false);
                assert_eq!(kept.as_str(), input);
            }
        }

        #[test]
        fn test_sanitize_version_string_is_not_numeric() {
            let mut value = TextValue::new("1.2.3<br>");
            value.sanitize(true);
            assert_eq!(value.as_str(), "1.2.3");
        }

        #[test]
        fn test_sanitize_is_idempotent() {
            let mut once = TextValue::new(r#"<p class="x">Fish & "chips" <3</p>"#);
            once.sanitize(true);
            let mut twice = once.clone();
            twice.sanitize(true);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_sanitize_keep_tags_converts_entities() {
            let mut value = TextValue::new("<i>Crème brûlée</i> © 'x'");
            value.sanitize(false);
            assert_eq!(
                value.as_str(),
                "&lt;i&gt;Cr&egrave;me br&ucirc;l&eacute;e&lt;/i&gt; &copy; &#039;x&#039;"
            );
            assert_eq!(decode_entities(value.as_str()), "<i>Crème brûlée</i> © 'x'");
        }
    }

    mod truncate_tests {
        use crate::TextValue;

        #[test]
        fn test_truncate_decodes_before_cutting() {
            let mut value = TextValue::new("&amp;hello world");
            value.truncate(5);
            assert_eq!(value.as_str(), "&hell...");
        }

        #[test]
        fn test_truncate_short_input_is_decoded_only() {
            let mut value = TextValue::new("Tom &amp; Jerry");
            value.truncate(100);
            assert_eq!(value.as_str(), "Tom & Jerry");
        }

        #[test]
        fn test_truncate_leaves_unterminated_references() {
            let mut value = TextValue::new("R&D &copy2024 &ampersand");
            value.truncate(100);
            assert_eq!(value.as_str(), "R&D &copy2024 &ampersand");

            let mut value = TextValue::new("&copy; &amp; &#x263A;");
            value.truncate(100);
            assert_eq!(value.as_str(), "© & ☺");
        }

        #[test]
        fn test_sanitize_then_truncate() {
            let mut value = TextValue::new("<b>Fish & chips</b> forever");
            value.sanitize(true);
            value.truncate(6);
            assert_eq!(value.as_str(), "Fish &...");
        }
    }

    mod whitespace_tests {
        use crate::TextValue;

        #[test]
        fn test_remove_whitespace() {
            let mut value = TextValue::new(" a b\tc\r\nd\u{0}e\u{1b}f ");
            value.remove_whitespace();
            assert_eq!(value.as_str(), "abcdef");
        }
    }

    mod color_tests {
        use crate::{GeneratedColor, Rgb, TextValue};

        #[test]
        fn test_generate_color_css() {
            let rgb = TextValue::new("").generate_color(false).as_rgb().unwrap();
            assert_eq!(rgb.to_hex(), "8ee8e");
            assert_eq!(rgb.to_css(), "#8e0e8e");
        }

        #[test]
        fn test_generate_color_rgb() {
            let value = TextValue::new("hello");
            assert_eq!(
                value.generate_color(false),
                GeneratedColor::Rgb(Rgb::new(17, 200, 179))
            );
        }

        #[test]
        fn test_generate_color_hex() {
            let value = TextValue::new("hello");
            assert_eq!(
                value.generate_color(true),
                GeneratedColor::Hex("11c8b3".to_string())
            );
        }

        #[test]
        fn test_generate_color_serializes_as_mapping() {
            let color = TextValue::new("Joe").generate_color(false);
            assert_eq!(
                serde_json::to_value(&color).unwrap(),
                serde_json::json!({ "r": 129, "g": 43, "b": 199 })
            );
        }

        #[test]
        fn test_generate_color_more_vectors() {
            let cases = [
                ("abc", Rgb::new(200, 200, 48), "c8c830"),
                ("Hello World", Rgb::new(53, 35, 118), "352376"),
            ];
            for (input, rgb, hex) in cases {
                let value = TextValue::new(input);
                assert_eq!(value.generate_color(false).as_rgb(), Some(rgb));
                assert_eq!(value.generate_color(true).as_hex(), Some(hex));
            }
        }
    }

    mod slug_tests {
        use crate::make_slug;

        #[test]
        fn test_make_slug_examples() {
            assert_eq!(make_slug("Joe's CNN.com"), "joes_cnn");
            assert_eq!(make_slug("me"), "me_1");
            assert_eq!(make_slug("!!!"), "");
        }

        #[test]
        fn test_make_slug_output_validates() {
            use crate::services::slug::validate_slug;
            for input in ["Hello World", "Joe's CNN.com", "type", "A.B.C 123"] {
                let slug = make_slug(input);
                assert!(validate_slug(&slug), "{:?} -> {:?}", input, slug);
            }
        }

        #[test]
        fn test_make_slug_does_not_cap_length() {
            use crate::services::slug::validate_slug;
            let slug = make_slug(&"a".repeat(201));
            assert_eq!(slug.len(), 201);
            assert!(!validate_slug(&slug));
            assert!(validate_slug(&make_slug(&"a".repeat(200))));
        }
    }
}
