use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 4] =
    ["mod.rs", "event.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let fs_modules = widget_dirs(&widgets_dir);
    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &fs_modules {
        let widget_dir = widgets_dir.join(module);
        validate_widget_dir(&widget_dir, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn widget_dirs(widgets_dir: &Path) -> BTreeSet<String> {
    let entries = fs::read_dir(widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });

    let mut dirs = BTreeSet::new();
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let file_type = entry.file_type().unwrap_or_else(|err| {
            panic!("failed to read file type for {}: {err}", path.display())
        });
        if file_type.is_dir() {
            dirs.insert(entry.file_name().to_string_lossy().to_string());
        }
    }
    dirs
}

fn validate_widget_dir(widget_dir: &Path, violations: &mut Vec<String>) {
    for required in REQUIRED_WIDGET_FILES {
        if !widget_dir.join(required).is_file() {
            violations.push(format!(
                "{}: widget is missing {required}",
                widget_dir.display()
            ));
        }
    }

    for logic_file in ["reducer.rs", "state.rs", "model.rs"] {
        let path = widget_dir.join(logic_file);
        if path.is_file() {
            validate_pure_file(&path, violations);
        }
    }

    let view_dir = widget_dir.join("view");
    if !view_dir.is_dir() {
        return;
    }

    let entries = fs::read_dir(&view_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", view_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        if path.file_name().is_some_and(|name| name == "mod.rs") {
            continue;
        }
        validate_view_file(&path, violations);
    }
}

/// Reducers, state and models take time from their context, never the clock.
fn validate_pure_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    let production = production_source(&source);

    for forbidden in ["Instant::now", "Utc::now", "Local::now", "SystemTime::now"]
    {
        if production.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden clock access: {forbidden}",
                file_path.display()
            ));
        }
    }
    if production.contains("crate::app::") {
        violations.push(format!(
            "{}: direct coupling to crate::app is forbidden",
            file_path.display()
        ));
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    if source.contains("crate::app::") {
        violations.push(format!(
            "{}: direct coupling to crate::app is forbidden",
            file_path.display()
        ));
    }
    if source.contains("crate::state::") {
        violations.push(format!(
            "{}: dependency on crate::state is forbidden in views",
            file_path.display()
        ));
    }

    for forbidden in [
        "log::",
        "std::fs::",
        "std::process::Command",
        "Task::",
        "iced::Task",
        "open::",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", ".elapsed(", "Utc::now"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("WidgetProps") {
                    violations.push(format!(
                        "{}: *WidgetProps suffix is forbidden; use <View>Props",
                        file_path.display()
                    ));
                }
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    let expected = format!("{expected_prefix}Props");
    for name in props_names {
        if name != expected {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected}'",
                file_path.display()
            ));
        }
    }
}

fn production_source(source: &str) -> &str {
    match source.find("#[cfg(test)]\nmod tests") {
        Some(index) => &source[..index],
        None => source,
    }
}

fn read(file_path: &Path) -> String {
    fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    })
}

fn parse(file_path: &Path) -> syn::File {
    syn::parse_file(&read(file_path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    })
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
