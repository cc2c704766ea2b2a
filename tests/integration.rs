use std::fs;
use std::path::{Path, PathBuf};

use reframe::config::{Framework, Pipeline, UiLibrary};
use reframe::report::FileOutcome;
use reframe::{convert, plan_conversion, ConvertOptions};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    @@include("./partials/title-meta.html", {"title": "Dashboard"})
    {{> partials/head-css}}
</head>
<body>
    {{> page-title title="Dashboard" subtitle="Home"}}
    <a href="apps-ecommerce-product-grid.html">Products</a>
    <a href="auth-cover-signin-basic.html">Sign in</a>
    {{&gt; partials/footer}}
</body>
</html>
"#;

const PRODUCT_GRID_HTML: &str = r#"<html>
<head>@@include("./partials/title-meta.html", {"title": "Product Grid"})</head>
<body>
    {{> partials/footer}}
    <a href="index.html">Home</a>
</body>
</html>
"#;

const SIGNIN_HTML: &str = r#"<html>
<body>
    <form action="index.html"><button>@@buttonText</button></form>
</body>
</html>
"#;

/// Lay out a minimal HTML kit: pages, partials, and one asset.
fn write_kit(root: &Path) {
    let pages = root.join("src");
    fs::create_dir_all(pages.join("partials")).unwrap();
    fs::create_dir_all(pages.join("assets/css")).unwrap();

    fs::write(pages.join("index.html"), INDEX_HTML).unwrap();
    fs::write(
        pages.join("apps-ecommerce-product-grid.html"),
        PRODUCT_GRID_HTML,
    )
    .unwrap();
    fs::write(pages.join("auth-cover-signin-basic.html"), SIGNIN_HTML).unwrap();

    fs::write(
        pages.join("partials/footer.html"),
        "<footer>{{ year }}</footer>\n",
    )
    .unwrap();
    fs::write(
        pages.join("partials/head-css.html"),
        "<link rel=\"stylesheet\" href=\"assets/css/app.css\">\n",
    )
    .unwrap();
    fs::write(
        pages.join("partials/page-title.html"),
        "<h4>{{ title }}</h4>\n",
    )
    .unwrap();
    fs::write(pages.join("assets/css/app.css"), "body {}\n").unwrap();
}

fn options(framework: Framework, src: &Path, dest: &Path) -> ConvertOptions {
    ConvertOptions {
        project_name: "kit".to_string(),
        framework,
        ui_library: UiLibrary::Bootstrap,
        pipeline: if framework.vite_only() {
            Pipeline::Vite
        } else {
            Pipeline::Gulp
        },
        src_path: src.to_path_buf(),
        dest_path: dest.to_path_buf(),
        exclude: Vec::new(),
        overwrite: false,
        skip_scaffold: true,
    }
}

#[test]
fn test_route_map_matches_kit_layout() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();

    let plan = plan_conversion(&options(
        Framework::Flask,
        kit.path(),
        &dest.path().join("out"),
    ))
    .unwrap();

    assert_eq!(plan.route_map["index.html"], "/");
    assert_eq!(
        plan.route_map["apps-ecommerce-product-grid.html"],
        "/apps/ecommerce/product-grid"
    );
    assert_eq!(
        plan.route_map["auth-cover-signin-basic.html"],
        "/auth-cover/signin-basic"
    );
}

#[test]
fn test_plan_writes_nothing() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("out");

    let plan = plan_conversion(&options(Framework::Php, kit.path(), &out)).unwrap();
    assert_eq!(plan.pages.len(), 3);
    assert!(!out.exists(), "planning must not touch the destination");
}

#[test]
fn test_php_conversion_end_to_end() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("kit");

    let report = convert(options(Framework::Php, kit.path(), &out)).unwrap();
    assert_eq!(report.skipped_count(), 0);

    // Restructured tree with the target extension.
    assert!(out.join("src/index.php").exists());
    assert!(out.join("src/apps/ecommerce/product-grid.php").exists());
    assert!(out.join("src/auth-cover/signin-basic.php").exists());
    assert!(out.join("src/partials/footer.php").exists());
    assert!(out.join("src/assets/css/app.css").exists());

    let index = fs::read_to_string(out.join("src/index.php")).unwrap();
    // Title include stripped entirely.
    assert!(!index.contains("title-meta"));
    // Both include syntaxes rewritten, escaped form included.
    assert!(index.contains("<?php include('./partials/head-css.php'); ?>"));
    assert!(index.contains("<?php include('./partials/footer.php'); ?>"));
    assert!(index.contains(
        "<?php $subtitle = 'Home'; $title = 'Dashboard'; include('./partials/page-title.php'); ?>"
    ));
    // Static links keep the extension convention.
    assert!(index.contains("href=\"apps-ecommerce-product-grid.php\""));

    // Inline variables rewritten, in partials too.
    let footer = fs::read_to_string(out.join("src/partials/footer.php")).unwrap();
    assert!(footer.contains("<?php echo ($year); ?>"));

    let signin = fs::read_to_string(out.join("src/auth-cover/signin-basic.php")).unwrap();
    assert!(signin.contains("action=\"index.php\""));
    assert!(signin.contains("<?php echo ($buttonText); ?>"));
}

#[test]
fn test_flask_conversion_routes_and_templates() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("kit");

    convert(options(Framework::Flask, kit.path(), &out)).unwrap();

    assert!(out.join("templates/index.html").exists());
    assert!(out
        .join("templates/apps/ecommerce/product-grid.html")
        .exists());
    assert!(out.join("templates/partials/footer.html").exists());
    assert!(out.join("static/css/app.css").exists());

    let index = fs::read_to_string(out.join("templates/index.html")).unwrap();
    assert!(!index.contains("title-meta"));
    assert!(index.contains("{% include 'partials/head-css.html' %}"));
    // Routed link convention.
    assert!(index.contains("href=\"/apps/ecommerce/product-grid\""));

    let routes = fs::read_to_string(out.join("routes.py")).unwrap();
    assert!(routes.contains("@pages.route('/')"));
    assert!(routes.contains("def index():"));
    assert!(routes.contains("@pages.route('/apps/ecommerce/product-grid')"));
    assert!(routes.contains("return render_template('apps/ecommerce/product-grid.html')"));
}

#[test]
fn test_node_routes_carry_titles() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("kit");

    convert(options(Framework::Node, kit.path(), &out)).unwrap();

    let routes = fs::read_to_string(out.join("routes/index.js")).unwrap();
    assert!(routes.contains("route.get('/', (req, res) => {"));
    assert!(routes.contains(r#"res.render('index', { title: "Dashboard" });"#));
    // The signin page has no title include, so it renders without one.
    assert!(routes.contains("res.render('auth-cover/signin-basic');"));
}

#[test]
fn test_mvc_pascal_case_layout() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("kit");

    convert(options(Framework::Mvc, kit.path(), &out)).unwrap();

    assert!(out.join("Views/Index.cshtml").exists());
    assert!(out.join("Views/Apps/Ecommerce/ProductGrid.cshtml").exists());
    assert!(out.join("Views/AuthCover/SigninBasic.cshtml").exists());
    assert!(out
        .join("Views/Shared/Partials/PageTitle.cshtml")
        .exists());

    let index = fs::read_to_string(out.join("Views/Index.cshtml")).unwrap();
    assert!(index
        .contains("@await Html.PartialAsync(\"~/Views/Shared/Partials/Footer.cshtml\")"));
    // Pascal casing never leaks into routes.
    assert!(index.contains("href=\"/apps/ecommerce/product-grid\""));
}

#[test]
fn test_destination_with_contents_is_rejected() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    fs::write(dest.path().join("existing.txt"), "occupied").unwrap();

    let result = plan_conversion(&options(Framework::Php, kit.path(), dest.path()));
    assert!(matches!(
        result,
        Err(reframe::error::ReframeError::DestinationExists { .. })
    ));
}

#[test]
fn test_overwrite_allows_existing_destination() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    fs::write(dest.path().join("existing.txt"), "occupied").unwrap();

    let mut opts = options(Framework::Php, kit.path(), dest.path());
    opts.overwrite = true;
    convert(opts).unwrap();
    assert!(dest.path().join("src/index.php").exists());
}

#[test]
fn test_bad_page_is_skipped_not_fatal() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    // A page that claims to be HTML but holds binary garbage.
    fs::write(
        kit.path().join("src/apps-broken.html"),
        [0u8, 159, 146, 150, 0, 255],
    )
    .unwrap();
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("kit");

    let report = convert(options(Framework::Php, kit.path(), &out)).unwrap();
    assert_eq!(report.skipped_count(), 1);
    assert!(report.outcomes.iter().any(|outcome| matches!(
        outcome,
        FileOutcome::Skipped { source, .. } if source == &PathBuf::from("apps-broken.html")
    )));
    // The rest of the batch still converted.
    assert!(out.join("src/index.php").exists());
}

#[test]
fn test_laravel_views_and_route_table() {
    let kit = tempfile::tempdir().unwrap();
    write_kit(kit.path());
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("kit");

    convert(options(Framework::Laravel, kit.path(), &out)).unwrap();

    assert!(out.join("resources/views/index.blade.php").exists());
    assert!(out
        .join("resources/views/shared/partials/footer.blade.php")
        .exists());

    let index = fs::read_to_string(out.join("resources/views/index.blade.php")).unwrap();
    assert!(index.contains("@include('shared.partials.head-css')"));

    let web = fs::read_to_string(out.join("routes/web.php")).unwrap();
    assert!(web.contains("Route::view('/', 'index')"));
    assert!(web.contains(
        "Route::view('/apps/ecommerce/product-grid', 'apps.ecommerce.product-grid')"
    ));
}
