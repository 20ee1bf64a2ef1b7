use assert_cmd::Command;
use predicates::prelude::*;
use sketchpad::document::load_image;
use sketchpad::draw::{BLUE, RED, Raster, WHITE};
use tempfile::TempDir;

fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("WAYLAND_DISPLAY")
        .arg("--no-clipboard");
    cmd
}

#[test]
fn sketchpad_help_prints_usage() {
    Command::cargo_bin("sketchpad")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drag-to-shape raster sketching"))
        .stdout(predicate::str::contains("--script"));
}

#[test]
fn blank_canvas_is_untitled() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Paint: (untitled) (600x400, zoom 1)"));
}

#[test]
fn script_from_stdin_draws_into_output() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("result");

    sketchpad_cmd(&temp)
        .arg("--script")
        .arg("-")
        .arg("--output")
        .arg(&output)
        .write_stdin("thickness 1\npress 10 10\nmove 10 50\nrelease\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("result.png"));

    let mut image = load_image(&temp.path().join("result.png")).unwrap();
    assert_eq!(image.pixel(30, 10).unwrap(), Some(RED));
    assert_eq!(image.pixel(30, 20).unwrap(), Some(WHITE));
}

#[test]
fn opens_existing_image_and_saves_back() {
    let temp = TempDir::new().unwrap();
    let picture = temp.path().join("picture.png");
    let mut file = std::fs::File::create(&picture).unwrap();
    Raster::blank(80, 60, WHITE)
        .unwrap()
        .write_png(&mut file)
        .unwrap();
    drop(file);

    let script = temp.path().join("gesture.txt");
    std::fs::write(
        &script,
        "color blue\ntool rectangle\nfill on\nfreehand on\npress 5 5\nmove 20 30\nrelease\nsave\n",
    )
    .unwrap();

    sketchpad_cmd(&temp)
        .arg(temp.path().join("picture"))
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Paint: picture.png (80x60"));

    let mut saved = load_image(&picture).unwrap();
    assert_eq!(saved.pixel(15, 12).unwrap(), Some(BLUE));
    assert_eq!(saved.pixel(40, 40).unwrap(), Some(WHITE));
}

#[test]
fn untitled_save_goes_to_configured_directory() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("sketchpad");
    std::fs::create_dir_all(&config_dir).unwrap();
    let out_dir = temp.path().join("out");
    std::fs::write(
        config_dir.join("config.toml"),
        format!(
            "[canvas]\nwidth = 32\nheight = 16\n\n[output]\nsave_directory = \"{}\"\nfilename_template = \"fixed\"\n",
            out_dir.display()
        ),
    )
    .unwrap();

    sketchpad_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("save\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paint: fixed.png (32x16"));

    let saved = load_image(&out_dir.join("fixed.png")).unwrap();
    assert_eq!((saved.width(), saved.height()), (32, 16));
}

#[test]
fn preview_is_zoomed() {
    let temp = TempDir::new().unwrap();
    let preview = temp.path().join("view.png");
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[canvas]\nwidth = 10\nheight = 8\n\n[display]\nzoom = 4\n").unwrap();

    sketchpad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--preview")
        .arg(&preview)
        .assert()
        .success()
        .stdout(predicate::str::contains("(10x8, zoom 4)"));

    let view = load_image(&preview).unwrap();
    assert_eq!((view.width(), view.height()), (40, 32));
}

#[test]
fn bad_script_line_is_reported() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("press 1 1\nmove 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_input_image_fails() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg(temp.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open initial image"));
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "[canvas\n").unwrap();

    sketchpad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
