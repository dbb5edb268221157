use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const GREETING: &str = r#"export function Greeting({ name }: { name: string }) {
    return (
        <div title="환영">
            안녕하세요
            <span>{`${name}님`}</span>
        </div>
    );
}
"#;

#[test]
fn test_wrap_dry_run_lists_sites() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", GREETING)?;

    let (code, stdout, _) = run(test.wrap_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("wrap: \"환영\"  attribute"), "stdout:\n{}", stdout);
    assert!(stdout.contains("--> ./src/app.tsx:3:20"), "stdout:\n{}", stdout);
    assert!(stdout.contains("wrap: \"안녕하세요\"  jsx-text"), "stdout:\n{}", stdout);
    assert!(stdout.contains("wrap: \"{{name}}님\"  template"), "stdout:\n{}", stdout);
    assert!(
        stdout.contains("Would wrap 3 literal(s) in 1 file(s)."),
        "stdout:\n{}",
        stdout
    );
    assert!(stdout.contains("Run with --apply"), "stdout:\n{}", stdout);

    // Dry run leaves the file alone.
    assert_eq!(test.read_file("src/app.tsx")?, GREETING);
    Ok(())
}

#[test]
fn test_wrap_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", GREETING)?;

    let mut cmd = test.wrap_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(
        stdout.contains("Wrapped 3 literal(s) in 1 file(s)."),
        "stdout:\n{}",
        stdout
    );

    let content = test.read_file("src/app.tsx")?;
    assert!(content.contains(r#"title={t("환영")}"#), "got:\n{}", content);
    assert!(content.contains(r#"{t("안녕하세요")}"#), "got:\n{}", content);
    assert!(content.contains(r#"t("{{name}}님""#), "got:\n{}", content);

    // A second run finds nothing left to wrap.
    let (code, stdout, _) = run(test.wrap_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("nothing to wrap"), "stdout:\n{}", stdout);
    Ok(())
}

#[test]
fn test_wrap_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "export const App = () => <div>Hello</div>;\n",
    )?;

    let (code, stdout, _) = run(test.wrap_command())?;

    assert_eq!(code, 0);
    assert!(
        stdout.contains("Checked 1 source file - nothing to wrap"),
        "stdout:\n{}",
        stdout
    );
    Ok(())
}

#[test]
fn test_wrap_skips_non_components() -> Result<()> {
    let test = CliTest::with_file(
        "src/constants.ts",
        "export const TITLE = \"제목\";\nexport function format() { return \"형식\"; }\n",
    )?;

    let (code, _, _) = run(test.wrap_command())?;

    assert_eq!(code, 0);
    assert!(test.read_file("src/constants.ts")?.contains("\"제목\""));
    Ok(())
}

#[test]
fn test_wrap_translation_fn_override() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        "export function App() {\n    return <p>안녕</p>;\n}\n",
    )?;

    let mut cmd = test.wrap_command();
    cmd.args(["--apply", "--translation-fn", "i18n"]);
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    let content = test.read_file("src/app.tsx")?;
    assert!(content.contains(r#"{i18n("안녕")}"#), "got:\n{}", content);
    Ok(())
}

#[test]
fn test_wrap_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".twraprc.json",
        r#"{
            "includes": ["web"],
            "translationFn": "translate",
            "scripts": ["Han"],
            "ignoreTexts": ["确定"]
        }"#,
    )?;
    test.write_file(
        "web/App.tsx",
        "export function App() {\n    return <div><p>你好</p><button>确定</button></div>;\n}\n",
    )?;

    let mut cmd = test.wrap_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0, "stdout:\n{}", stdout);
    let content = test.read_file("web/App.tsx")?;
    assert!(content.contains(r#"{translate("你好")}"#), "got:\n{}", content);
    assert!(content.contains("<button>确定</button>"), "got:\n{}", content);
    Ok(())
}

#[test]
fn test_wrap_ignores_test_files() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.test.tsx",
        "export function App() {\n    return <p>안녕</p>;\n}\n",
    )?;

    let (code, stdout, _) = run(test.wrap_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 0 source files"), "stdout:\n{}", stdout);
    Ok(())
}

#[test]
fn test_wrap_parse_error_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.tsx", "export function App() { return <div>; }\n")?;
    test.write_file(
        "src/ok.tsx",
        "export function Ok() {\n    return <p>안녕</p>;\n}\n",
    )?;

    let mut cmd = test.wrap_command();
    cmd.arg("--apply");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(
        stderr.contains("1 file(s) could not be parsed"),
        "stderr:\n{}",
        stderr
    );
    // Files that parsed are still rewritten.
    assert!(test.read_file("src/ok.tsx")?.contains(r#"{t("안녕")}"#));
    Ok(())
}

#[test]
fn test_wrap_invalid_script_is_config_error() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", GREETING)?;

    let mut cmd = test.wrap_command();
    cmd.args(["--script", "Not-A-Script"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error:"), "stderr:\n{}", stderr);
    Ok(())
}

#[test]
fn test_wrap_verbose_lists_components() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", GREETING)?;

    let mut cmd = test.wrap_command();
    cmd.arg("-v");
    let (_, _, stderr) = run(cmd)?;

    assert!(stderr.contains("Greeting (function)"), "stderr:\n{}", stderr);
    Ok(())
}
