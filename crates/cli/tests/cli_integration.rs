use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{Rgba, RgbaImage};

fn make_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before UNIX_EPOCH")
        .as_nanos();
    let pid = std::process::id();
    let dir = std::env::temp_dir().join(format!("raster2svg-integ-{prefix}-{pid}-{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

/// A 3x2 image whose last pixel is half transparent.
fn write_fixture_png(dir: &Path) -> PathBuf {
    let img = RgbaImage::from_fn(3, 2, |x, y| {
        if (x, y) == (2, 1) {
            Rgba([0, 0, 255, 128])
        } else {
            Rgba([(x * 100) as u8, (y * 100) as u8, 7, 255])
        }
    });
    let path = dir.join("fixture.png");
    img.save(&path).expect("failed to write fixture png");
    path
}

fn raster2svg() -> Command {
    Command::new(env!("CARGO_BIN_EXE_raster2svg"))
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run raster2svg")
}

fn describe(out: &Output) -> String {
    format!(
        "status: {}\nstdout:\n{}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    )
}

fn assert_exit(out: &Output, code: i32) {
    assert_eq!(out.status.code(), Some(code), "{}", describe(out));
}

fn assert_contains(haystack: &str, needle: &str) {
    assert!(haystack.contains(needle), "{haystack}");
}

#[test]
fn help_works() {
    let out = run(raster2svg().arg("--help"));
    assert_exit(&out, 0);

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Syntax:\n"), "{}", describe(&out));
    for name in ["--inputFile", "--outputFile", "--scale"] {
        assert_contains(&stdout, name);
    }
    for name in ["--strokeWidth", "--strokeColor", "- white"] {
        assert_contains(&stdout, name);
    }
}

#[test]
fn missing_input_fails_with_help() {
    let out = run(&mut raster2svg());
    assert_exit(&out, 1);

    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stdout.starts_with("Syntax:\n"), "{}", describe(&out));
    assert_contains(&stderr, "an input file is required");
}

#[test]
fn bad_option_value_fails() {
    let out = run(raster2svg().args(["-s", "big", "in.png"]));
    assert_exit(&out, 1);
    assert_contains(&String::from_utf8_lossy(&out.stderr), "-s");

    let out = run(raster2svg().args(["--strokeColor", "purple", "in.png"]));
    assert_exit(&out, 1);
}

#[test]
fn positional_input_writes_svg_next_to_it() {
    let dir = make_temp_dir("positional");
    let input = write_fixture_png(&dir);

    let out = run(raster2svg().arg(&input));
    assert_exit(&out, 0);

    let svg = fs::read_to_string(dir.join("fixture.svg")).expect("fixture.svg not written");
    assert_eq!(svg.matches("<polygon ").count(), 6, "{svg}");
    assert_contains(&svg, r#"<svg width="30" height="20" viewBox="0 0 3 2""#);
    assert_contains(
        &svg,
        r#"points="1,0 2,0 2,1 1,1" style="fill:rgb(100,0,7);stroke:black;stroke-width:0.01""#,
    );
    assert_contains(&svg, r#"points="2,1 3,1 3,2 2,2" style="fill:none;"#);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_options_are_applied() {
    let dir = make_temp_dir("explicit");
    let input = write_fixture_png(&dir);
    let output = dir.join("custom.svg");

    let mut cmd = raster2svg();
    cmd.arg("-i").arg(&input).arg("--outputFile").arg(&output);
    cmd.args(["--scale", "2", "-w", "0.5", "-k", "none"]);
    let out = run(&mut cmd);
    assert_exit(&out, 0);

    let svg = fs::read_to_string(&output).expect("custom.svg not written");
    assert_contains(&svg, r#"width="6" height="4""#);
    assert_contains(&svg, "stroke:none;stroke-width:0.5");
    assert!(!dir.join("fixture.svg").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_input_reports_path() {
    let dir = make_temp_dir("unreadable");
    let input = dir.join("missing.png");

    let out = run(raster2svg().arg(&input));
    assert_exit(&out, 1);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_contains(&stderr, "failed to load");
    assert_contains(&stderr, "missing.png");

    let _ = fs::remove_dir_all(&dir);
}
