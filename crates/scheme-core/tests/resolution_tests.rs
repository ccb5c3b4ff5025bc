//! Tests for end-to-end scheme resolution

use pretty_assertions::assert_eq;
use rstest::rstest;
use scheme_core::{
    DirectiveValue, Error, OptionsTable, Scalar, Scheme, SchemeConfig, TemplateFilter,
};
use scheme_test_utils::TestThemeRoot;

/// a <- b <- c, each with a config file.
fn three_generations() -> TestThemeRoot {
    let root = TestThemeRoot::new();
    root.write_config("a", "x = 1\nlayout = \"narrow\"\n");
    root.write_config("b", "parent_theme = \"a\"\n");
    root.write_config("c", "parent_theme = \"b\"\nx = 2\n");
    root
}

fn load(root: &TestThemeRoot, theme: &str) -> scheme_core::Result<Scheme> {
    Scheme::load(SchemeConfig::new(root.root(), theme))
}

mod stack_ordering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chain_is_ancestor_first() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();
        assert_eq!(scheme.themes().to_vec(false), vec!["a", "b", "c"]);
        assert_eq!(scheme.themes().to_vec(true), vec!["c", "b", "a"]);
        assert_eq!(scheme.themes().len(), 3);
    }

    #[test]
    fn theme_without_config_is_a_bare_leaf() {
        let root = TestThemeRoot::new();
        root.create_theme("plain");
        let scheme = load(&root, "plain").unwrap();
        assert_eq!(scheme.themes().to_vec(false), vec!["plain"]);
        assert!(scheme.directives().is_empty());
    }

    #[test]
    fn cyclic_chain_fails() {
        let root = TestThemeRoot::new();
        root.write_config("a", "parent_theme = \"b\"\n");
        root.write_config("b", "parent_theme = \"a\"\n");
        let err = load(&root, "a").unwrap_err();
        assert!(matches!(err, Error::CyclicInheritance { ref chain } if chain == "a -> b -> a"));
    }
}

mod directive_precedence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn most_specific_value_wins() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();
        assert_eq!(scheme.directive("x"), Some(&DirectiveValue::from(2_i64)));
    }

    #[test]
    fn inherited_value_shows_through() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();
        assert_eq!(
            scheme.directive("layout").and_then(DirectiveValue::as_str),
            Some("narrow")
        );
    }

    #[test]
    fn parent_theme_is_itself_a_directive() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();
        assert_eq!(
            scheme.directive("parent_theme").and_then(DirectiveValue::as_str),
            Some("b")
        );
    }

    #[test]
    fn absent_directive_is_none() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();
        assert!(!scheme.has_directive("missing"));
        assert_eq!(scheme.directive("missing"), None);
    }

    #[test]
    fn advanced_group_flattens_to_identical_entry() {
        let root = TestThemeRoot::new();
        root.write_config("top", "key = \"val\"\n");
        root.write_config("adv", "[advanced]\nkey = \"val\"\n");

        let top = load(&root, "top").unwrap();
        let adv = load(&root, "adv").unwrap();

        let top_entry = top.directives().entry("top", "key").unwrap();
        let adv_entry = adv.directives().entry("adv", "key").unwrap();
        assert_eq!(top_entry.value, adv_entry.value);
        assert_eq!(top_entry.read_only, adv_entry.read_only);
        assert_eq!(top.directive("key"), adv.directive("key"));
        assert!(!adv.has_directive("advanced"));
    }

    #[test]
    fn unquoted_values_inherit_through_chain() {
        let root = TestThemeRoot::new();
        root.write_config("base", "layout = narrow\n");
        root.write_config("child", "parent_theme = base\n");

        let scheme = load(&root, "child").unwrap();
        assert_eq!(scheme.themes().to_vec(false), vec!["base", "child"]);
        assert_eq!(
            scheme.directive("layout").and_then(DirectiveValue::as_str),
            Some("narrow")
        );
    }

    #[test]
    fn bare_advanced_section_matches_top_level_key() {
        let root = TestThemeRoot::new();
        root.write_config("top", "key=val\n");
        root.write_config("adv", "[advanced]\nkey=val\n");

        let top = load(&root, "top").unwrap();
        let adv = load(&root, "adv").unwrap();
        assert_eq!(adv.directive("key"), Some(&DirectiveValue::from("val")));
        assert_eq!(top.directive("key"), adv.directive("key"));
        assert!(adv.directives().entry("adv", "key").unwrap().read_only);
    }

    #[test]
    fn parse_error_aborts_and_names_file() {
        let root = TestThemeRoot::new();
        root.write_config("a", "= orphan\n");
        root.write_config("b", "parent_theme = \"a\"\n");
        let err = load(&root, "b").unwrap_err();
        match err {
            Error::ConfigParse { path, .. } => {
                assert!(path.to_string_lossy().ends_with("a/config/scheme.ini"))
            }
            other => panic!("expected parse error, got {other}"),
        }
    }
}

mod file_location {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn miss_returns_none() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();
        assert_eq!(scheme.locate_file(["missing.php"]), None);
    }

    #[rstest]
    #[case(&["assets", "css", "style.css"])]
    #[case(&["assets/css", "style.css"])]
    #[case(&["assets/css/style.css"])]
    #[case(&["assets\\css\\style.css"])]
    fn split_and_joined_parts_are_equivalent(#[case] parts: &[&str]) {
        let root = three_generations();
        root.write_file("b", "assets/css/style.css", "b");
        let scheme = load(&root, "c").unwrap();

        let located = scheme.locate_file(parts).unwrap();
        assert!(located.as_str().ends_with("b/assets/css/style.css"));
    }

    #[test]
    fn config_file_lookup_prefers_specific_theme() {
        let root = three_generations();
        root.write_file("a", "config/menus.toml", "");
        root.write_file("c", "config/menus.toml", "");
        let scheme = load(&root, "c").unwrap();

        let located = scheme.locate_config_file(["menus.toml"]).unwrap();
        assert!(located.as_str().ends_with("c/config/menus.toml"));
    }
}

mod template_resolution {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_candidate_found_top_down() {
        let root = three_generations();
        root.write_file("a", "special-x.php", "");
        root.write_file("c", "special.php", "");
        let scheme = load(&root, "c").unwrap();

        let located = scheme
            .locate_template(["special-x.php", "special.php"])
            .unwrap();
        assert!(located.as_str().ends_with("a/special-x.php"));
    }

    #[test]
    fn second_candidate_when_first_missing_everywhere() {
        let root = three_generations();
        root.write_file("a", "special.php", "");
        root.write_file("b", "special.php", "");
        let scheme = load(&root, "c").unwrap();

        let located = scheme
            .locate_template(["special-x.php", "special.php"])
            .unwrap();
        assert!(located.as_str().ends_with("b/special.php"));
    }

    #[test]
    fn declared_default_used_unchanged() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();

        assert_eq!(
            scheme
                .templates()
                .locate_template_or(["special-x.php", "special.php"], "/host/special.php"),
            "/host/special.php"
        );
        assert_eq!(scheme.filter_template("/host/special.php"), "/host/special.php");
    }
}

mod merge_resolve_equivalence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("\"narrow\"", "\"wide\"")]
    #[case("false", "true")]
    #[case("1", "2")]
    fn bottom_up_merge_agrees_with_top_down_resolve(
        #[case] general: &str,
        #[case] specific: &str,
    ) {
        let root = TestThemeRoot::new();
        root.write_config("base", &format!("layout = {general}\n"));
        root.write_config(
            "child",
            &format!("parent_theme = \"base\"\nlayout = {specific}\n"),
        );
        root.write_options("base", &format!("[layout]\nvalue = {general}\n"));
        root.write_options("child", &format!("[layout]\nvalue = {specific}\n"));

        let scheme = load(&root, "child").unwrap();
        let mut table = OptionsTable::new();
        assert_eq!(scheme.load_options(&mut table, None).unwrap(), 2);

        let resolved = scheme.directive("layout").unwrap();
        let merged = table.field("layout", "value").unwrap();
        assert_eq!(resolved, merged);
        assert_eq!(table.get("layout").unwrap().theme, "child");
    }

    #[test]
    fn ancestor_only_key_agrees_too() {
        let root = TestThemeRoot::new();
        root.write_config("base", "layout = \"narrow\"\n");
        root.write_config("child", "parent_theme = \"base\"\n");
        root.write_options("base", "[layout]\nvalue = \"narrow\"\n");

        let scheme = load(&root, "child").unwrap();
        let mut table = OptionsTable::new();
        scheme.load_options(&mut table, None).unwrap();

        assert_eq!(
            scheme.directive("layout"),
            table.field("layout", "value")
        );
        assert_eq!(
            table.field("layout", "value").and_then(DirectiveValue::as_scalar),
            Some(&Scalar::from("narrow"))
        );
    }
}

mod accessors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enumerations_cover_whole_stack_top_down() {
        let root = three_generations();
        let scheme = load(&root, "c").unwrap();
        let docs: Vec<String> = scheme
            .locator()
            .theme_documentation_dirs()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(docs.len(), 3);
        let themes: Vec<&str> = ["c", "b", "a"]
            .into_iter()
            .zip(&docs)
            .filter(|(theme, dir)| dir.ends_with(&format!("{theme}/config/docs")))
            .map(|(theme, _)| theme)
            .collect();
        assert_eq!(themes, vec!["c", "b", "a"]);
    }

    #[test]
    fn asset_urls_use_active_theme() {
        let root = three_generations();
        let config = SchemeConfig::new(root.root(), "c").with_root_url("https://cdn.test/themes");
        let scheme = Scheme::load(config).unwrap();
        assert_eq!(scheme.paths().css_url(None), "https://cdn.test/themes/c/assets/css");
    }

    #[test]
    fn bootstrap_files_run_ancestor_first() {
        let root = three_generations();
        root.write_file("a", "functions.php", "");
        root.write_file("c", "functions.php", "");
        let scheme = load(&root, "c").unwrap();

        let files = scheme.locator().bootstrap_files(["functions.php"]);
        assert_eq!(files.len(), 2);
        assert!(files[0].as_str().ends_with("a/functions.php"));
    }
}
