use assert_cmd::Command;

fn pigmix() -> Command {
    let mut cmd = Command::cargo_bin("pigmix").unwrap();
    cmd.env_remove("PIGMIX_COLOR_MODE");
    cmd
}

#[test]
fn mix_reads_recipes_from_args() {
    pigmix()
        .arg("mix")
        .arg("50% red + 50% blue")
        .assert()
        .success()
        .stdout("rgb(127.5,0,127.5)\n");

    pigmix()
        .arg("mix")
        .arg("25% white + 25% black + 50% red")
        .arg("100% lime")
        .assert()
        .success()
        .stdout("rgb(191.25,63.75,63.75)\nrgb(0,255,0)\n");
}

#[test]
fn mix_reads_recipes_from_stdin() {
    pigmix()
        .arg("mix")
        .write_stdin("50% red + 50% blue\n100% lime\n")
        .assert()
        .success()
        .stdout("rgb(127.5,0,127.5)\nrgb(0,255,0)\n");

    pigmix().arg("mix").write_stdin("no recipe").assert().failure();

    pigmix().arg("mix").write_stdin("").assert().failure();
}

#[test]
fn mix_rejects_invalid_proportion_sums() {
    pigmix()
        .arg("mix")
        .arg("60% red + 60% blue")
        .assert()
        .failure();
}

#[test]
fn mix_rejects_malformed_recipes() {
    pigmix().arg("mix").arg("red + blue").assert().failure();
    pigmix().arg("mix").arg("50% nocolor + 50% red").assert().failure();
}

#[test]
fn compare_basic() {
    pigmix()
        .arg("compare")
        .arg("100% red")
        .arg("100% red")
        .assert()
        .success()
        .stdout("100\n");

    pigmix()
        .arg("compare")
        .arg("100% red")
        .arg("100% lime")
        .assert()
        .success()
        .stdout("32\n");
}

#[test]
fn compare_is_order_sensitive() {
    pigmix()
        .arg("compare")
        .arg("100% rgb(127.5, 0, 127.5)")
        .arg("50% red + 50% blue")
        .assert()
        .success()
        .stdout("85\n");

    pigmix()
        .arg("compare")
        .arg("50% red + 50% blue")
        .arg("100% rgb(127.5, 0, 127.5)")
        .assert()
        .success()
        .stdout("72\n");
}

#[test]
fn compare_rejects_invalid_proportion_sums() {
    pigmix()
        .arg("compare")
        .arg("100% red")
        .arg("90% blue")
        .assert()
        .failure();
}

#[test]
fn pipe_random_into_mix_command() {
    let first = pigmix()
        .arg("random")
        .arg("-n")
        .arg("4")
        .assert()
        .success();

    pigmix()
        .arg("mix")
        .write_stdin(String::from_utf8(first.get_output().stdout.clone()).unwrap())
        .assert()
        .success();
}

#[test]
fn random_rejects_invalid_entry_counts() {
    pigmix().arg("random").arg("-n").arg("0").assert().failure();
    pigmix().arg("random").arg("-n").arg("101").assert().failure();
    pigmix().arg("random").arg("-n").arg("four").assert().failure();
}
