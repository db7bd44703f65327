use twig::{
    build_with, prefix, render, MemoryFs, TreeConfig, TreeError, TreeOptions, TreeOptionsBuilder,
};
fn config(builder: TreeOptionsBuilder) -> TreeConfig {
    builder.build().compile().unwrap()
}
fn dot_project() -> MemoryFs {
    MemoryFs::new(".")
        .dir(".idea")
        .file(".idea/run.xml")
        .file(".gitignore")
}
fn rendered(fs: &MemoryFs, config: &TreeConfig) -> String {
    let tree = build_with(fs, ".", config).unwrap();
    render(&tree, config)
}
#[test]
fn test_hidden_entries_excluded_by_default() {
    let config = TreeConfig::default();
    assert_eq!(rendered(&dot_project(), &config), ".\n");
}
#[test]
fn test_hidden_entries_included() {
    let config = config(TreeOptionsBuilder::new().include_hidden(true));
    assert_eq!(
        rendered(&dot_project(), &config),
        ".\n├── .idea\n|    └── run.xml\n└── .gitignore\n"
    );
}
#[test]
fn test_no_indentation() {
    let config = config(
        TreeOptionsBuilder::new()
            .include_hidden(true)
            .disable_indentation(true),
    );
    assert_eq!(
        rendered(&dot_project(), &config),
        ".\n.idea\nrun.xml\n.gitignore\n"
    );
}
#[test]
fn test_no_indentation_with_full_paths() {
    let config = config(
        TreeOptionsBuilder::new()
            .include_hidden(true)
            .disable_indentation(true)
            .full_paths(true),
    );
    assert_eq!(
        rendered(&dot_project(), &config),
        ".\n./.idea\n./.idea/run.xml\n./.gitignore\n"
    );
}
#[test]
fn test_root_line_is_full_path() {
    let fs = MemoryFs::new("some/root").file("a.txt");
    let config = TreeConfig::default();
    let tree = build_with(&fs, "some/root", &config).unwrap();
    assert_eq!(render(&tree, &config), "some/root\n└── a.txt\n");
}
#[test]
fn test_full_paths_keep_trailing_separator() {
    let fs = MemoryFs::new("root/").file("a.txt").file("sub/b.txt");
    let config = config(TreeOptionsBuilder::new().full_paths(true));
    let tree = build_with(&fs, "root/", &config).unwrap();
    assert_eq!(
        render(&tree, &config),
        "root/\n├── root//a.txt\n└── root//sub\n    └── root//sub/b.txt\n"
    );
}
#[test]
fn test_last_element_connector() {
    let fs = MemoryFs::new(".").file("x").file("y").file("z");
    let out = rendered(&fs, &TreeConfig::default());
    assert_eq!(out, ".\n├── x\n├── y\n└── z\n");
    assert_eq!(out.matches("└──").count(), 1);
}
#[test]
fn test_listing_order_is_kept() {
    let fs = MemoryFs::new(".").file("b").file("c").file("a");
    assert_eq!(
        rendered(&fs, &TreeConfig::default()),
        ".\n├── b\n├── c\n└── a\n"
    );
}
#[test]
fn test_prefix_chain_continuation() {
    let fs = MemoryFs::new(".")
        .file("a/b/c")
        .file("a/b/d")
        .file("a/e")
        .file("f/g/h");
    assert_eq!(
        rendered(&fs, &TreeConfig::default()),
        concat!(
            ".\n",
            "├── a\n",
            "|    ├── b\n",
            "|    |    ├── c\n",
            "|    |    └── d\n",
            "|    └── e\n",
            "└── f\n",
            "    └── g\n",
            "        └── h\n",
        )
    );
}
#[test]
fn test_prefix_of_nodes() {
    let fs = MemoryFs::new(".").file("a/b/c").file("a/e");
    let config = TreeConfig::default();
    let tree = build_with(&fs, ".", &config).unwrap();
    let root = tree.root();
    assert_eq!(prefix(&tree, root), "");
    let c = tree.find("./a/b/c").unwrap();
    assert_eq!(tree.depth(c), 3);
    assert_eq!(prefix(&tree, c), "    |    └── ");
    let e = tree.find("./a/e").unwrap();
    assert_eq!(prefix(&tree, e), "    └── ");
}
#[test]
fn test_directories_only() {
    let fs = MemoryFs::new(".")
        .file("README.md")
        .file("src/lib.rs")
        .dir("src/bin")
        .dir("empty");
    let config = config(TreeOptionsBuilder::new().directories_only(true));
    let tree = build_with(&fs, ".", &config).unwrap();
    for (_, node) in tree.iter() {
        assert!(node.is_dir, "{} is not a directory", node.path.display());
    }
    assert_eq!(
        render(&tree, &config),
        ".\n├── src\n|    └── bin\n└── empty\n"
    );
}
#[test]
fn test_pattern_includes_ancestors() {
    let fs = MemoryFs::new(".")
        .file("a/b/c")
        .file("d/e");
    let config = config(TreeOptionsBuilder::new().pattern("c"));
    let out = rendered(&fs, &config);
    assert_eq!(out, ".\n└── a\n    └── b\n        └── c\n");
    assert!(!out.contains('d'));
}
#[test]
fn test_pattern_matches_directory_name() {
    let fs = MemoryFs::new(".")
        .file("target/debug/app")
        .file("src/main.rs");
    let config = config(TreeOptionsBuilder::new().pattern("target"));
    assert_eq!(
        rendered(&fs, &config),
        ".\n└── target\n"
    );
}
#[test]
fn test_pattern_with_wildcard() {
    let fs = MemoryFs::new(".")
        .file("Cargo.toml")
        .file("src/lib.rs")
        .file("src/notes.txt")
        .file("docs/guide.md");
    let config = config(TreeOptionsBuilder::new().pattern("*.rs"));
    assert_eq!(rendered(&fs, &config), ".\n└── src\n    └── lib.rs\n");
}
#[test]
fn test_hidden_filter_beats_pattern() {
    let fs = MemoryFs::new(".").file(".hidden/match.rs").file("visible.rs");
    let config = config(TreeOptionsBuilder::new().pattern("*.rs"));
    assert_eq!(rendered(&fs, &config), ".\n└── visible.rs\n");
}
#[test]
fn test_star_and_empty_pattern_match_everything() {
    let fs = MemoryFs::new(".").file("a/b").file("c");
    let everything = rendered(&fs, &TreeConfig::default());
    let star = config(TreeOptionsBuilder::new().pattern("*"));
    assert_eq!(rendered(&fs, &star), everything);
    let empty = config(TreeOptionsBuilder::new().pattern(""));
    assert_eq!(empty.pattern(), None);
    assert_eq!(rendered(&fs, &empty), everything);
}
#[test]
fn test_filter_idempotence() {
    let fs = MemoryFs::new(".")
        .file("a/one.rs")
        .file("a/.two.rs")
        .file("b/three.txt")
        .file("four.rs");
    let config = config(TreeOptionsBuilder::new().pattern("*.rs"));
    let first = build_with(&fs, ".", &config).unwrap();
    let mut again = MemoryFs::new(".");
    for (id, node) in first.iter() {
        if id == first.root() {
            continue;
        }
        let relative = node.path.strip_prefix(".").unwrap();
        again = if node.is_dir {
            again.dir(relative)
        } else {
            again.file(relative)
        };
    }
    let second = build_with(&again, ".", &config).unwrap();
    assert_eq!(first, second);
}
#[test]
fn test_hidden_names_toggle() {
    for name in [".a", ".git", "..b", ".x.rs"] {
        let fs = MemoryFs::new(".").file(name);
        let hidden = rendered(&fs, &TreeConfig::default());
        assert!(!hidden.contains(name), "{name} shown while hidden");
        let all = config(TreeOptionsBuilder::new().include_hidden(true));
        let shown = rendered(&fs, &all);
        assert!(shown.contains(name), "{name} missing with include_hidden");
    }
}
#[test]
fn test_tree_links() {
    let config = config(TreeOptionsBuilder::new().include_hidden(true));
    let tree = build_with(&dot_project(), ".", &config).unwrap();
    assert_eq!(tree.len(), 4);
    assert!(!tree.is_empty());
    let root = tree.root();
    assert_eq!(tree.node(root).parent(), None);
    assert!(tree.is_last_sibling(root));
    for &child in tree.node(root).children() {
        assert_eq!(tree.node(child).parent(), Some(root));
    }
    let idea = tree.find("./.idea").unwrap();
    let gitignore = tree.find("./.gitignore").unwrap();
    assert!(!tree.is_last_sibling(idea));
    assert!(tree.is_last_sibling(gitignore));
    assert_eq!(tree.node(idea).name, ".idea");
    assert!(tree.node(idea).matched());
}
#[test]
fn test_missing_root() {
    let fs = MemoryFs::new(".");
    let err = build_with(&fs, "./nope", &TreeConfig::default()).unwrap_err();
    assert!(matches!(err, TreeError::Path { .. }));
}
#[test]
fn test_list_error_aborts_build() {
    let fs = MemoryFs::new(".")
        .file("ok/a")
        .file("locked/secret")
        .deny("locked");
    let err = build_with(&fs, ".", &TreeConfig::default()).unwrap_err();
    match err {
        TreeError::List { path, .. } => assert!(path.ends_with("locked")),
        other => panic!("unexpected error: {other}"),
    }
}
#[test]
fn test_invalid_pattern_rejected() {
    let err = TreeOptionsBuilder::new()
        .pattern("a[")
        .build()
        .compile()
        .unwrap_err();
    assert!(matches!(err, TreeError::Pattern { ref pattern, .. } if pattern == "a["));
    assert!(err.to_string().contains("a["));
}
#[test]
fn test_options_deserialize_with_defaults() {
    let options: TreeOptions =
        serde_json::from_str(r#"{"include_hidden": true, "pattern": "*.rs"}"#).unwrap();
    assert_eq!(
        options,
        TreeOptionsBuilder::new()
            .include_hidden(true)
            .pattern("*.rs")
            .build()
    );
    let config = options.compile().unwrap();
    assert!(config.include_hidden);
    assert!(!config.directories_only);
    assert_eq!(config.pattern(), Some("*.rs"));
}
