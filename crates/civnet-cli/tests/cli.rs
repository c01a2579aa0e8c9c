use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const ROAD: &str = "# street lengths\nA B 1\nB C 2\nC D 1\nD A 5\nB D 2\n";
const WATER: &str = "P1 a\na b\nb c\nc d\nd a\ne a\nP2 x\n";
const ELECTRICAL: &str = "s1 s2\ns2 s3\ns4 s5\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("vial.txt"), ROAD).unwrap();
        fs::write(dir.path().join("hidrica.txt"), WATER).unwrap();
        fs::write(dir.path().join("electrica.txt"), ELECTRICAL).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn run(&self, queries: &Path) -> Command {
        let mut cmd = Command::cargo_bin("civnet").unwrap();
        cmd.current_dir(self.dir.path()).args([
            "run",
            queries.to_str().unwrap(),
            "--electrical",
            self.path("electrica.txt").to_str().unwrap(),
            "--road",
            self.path("vial.txt").to_str().unwrap(),
            "--water",
            self.path("hidrica.txt").to_str().unwrap(),
        ]);
        cmd
    }
}

#[test]
fn run_answers_every_query_kind() {
    let fixture = Fixture::new();
    let queries = fixture.write(
        "consultas.txt",
        "# city queries\n\
         COMPONENTES_CONEXOS ELECTRICA\n\
         ORDEN_FALLOS HIDRICA\n\
         CAMINO_MINIMO A D\n\
         CAMINO_MINIMO_SIMULAR_CORTE {B} A D\n\
         CAMINO_RECOLECCION_BASURA\n\
         PLANTAS_ASIGNADAS P1 P2\n\
         PUENTES_Y_ARTICULACIONES\n",
    );

    fixture
        .run(&queries)
        .assert()
        .success()
        .stdout(predicate::str::contains("1: s1, s2, s3"))
        .stdout(predicate::str::contains("2: s4, s5"))
        .stdout(predicate::str::contains("distance: 3.00"))
        .stdout(predicate::str::contains("path: A -> B -> D"))
        .stdout(predicate::str::contains("blocked: {B}"))
        .stdout(predicate::str::contains("distance: 5.00"))
        .stdout(predicate::str::contains("route: A -> B -> C -> D"))
        .stdout(predicate::str::contains("P2: P2, x"))
        .stdout(predicate::str::contains("unassigned: none"))
        .stdout(predicate::str::contains("articulation points: a\n"));
}

#[test]
fn run_keeps_going_after_a_bad_query() {
    let fixture = Fixture::new();
    let queries = fixture.write(
        "consultas.txt",
        "VOLAR A B\nCAMINO_MINIMO A\nCAMINO_MINIMO A Z\n",
    );

    fixture
        .run(&queries)
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: unknown command 'VOLAR'"))
        .stdout(predicate::str::contains(
            "ERROR: CAMINO_MINIMO is missing its destination argument",
        ))
        .stdout(predicate::str::contains("distance: no route"));
}

#[test]
fn run_writes_json_report_to_file() {
    let fixture = Fixture::new();
    let queries = fixture.write("consultas.txt", "CAMINO_MINIMO A D\nPUENTES_Y_ARTICULACIONES\n");
    let out = fixture.path("reporte.jsonl");

    fixture
        .run(&queries)
        .args(["--format", "json", "-o", out.to_str().unwrap()])
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    let lines: Vec<serde_json::Value> = report
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["query"], "shortest_path");
    assert_eq!(lines[0]["distance"], 3.0);
    assert_eq!(lines[1]["query"], "critical_links");
    assert_eq!(lines[1]["bridges"][0]["a"], "P1");
    assert_eq!(lines[1]["articulation_points"][0], "a");
}

#[test]
fn run_reads_networks_from_config_file() {
    let fixture = Fixture::new();
    fixture.write(
        "civnet.toml",
        "[networks]\nroad = \"vial.txt\"\n\n[output]\ndecimals = 1\n",
    );
    let queries = fixture.write("consultas.txt", "CAMINO_MINIMO A C\nORDEN_FALLOS HIDRICA\n");

    let mut cmd = Command::cargo_bin("civnet").unwrap();
    cmd.current_dir(fixture.dir.path())
        .args(["run", queries.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 3.0\n"))
        .stdout(predicate::str::contains("the HIDRICA network was not loaded"));
}

#[test]
fn run_reports_load_issues_and_still_answers() {
    let fixture = Fixture::new();
    fixture.write("hidrica.txt", "P1 a\na\na b\n");
    let queries = fixture.write("consultas.txt", "ORDEN_FALLOS HIDRICA\n");

    fixture
        .run(&queries)
        .assert()
        .success()
        .stderr(predicate::str::contains("Networks loaded with issues"))
        .stdout(predicate::str::contains("1. P1 (degree 1)"));
}

#[test]
fn run_fails_on_missing_query_file() {
    let fixture = Fixture::new();
    fixture
        .run(&fixture.path("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("opening query file"));
}

#[test]
fn graph_subcommands_work_on_a_single_file() {
    let fixture = Fixture::new();
    let road = fixture.path("vial.txt");
    let water = fixture.path("hidrica.txt");

    Command::cargo_bin("civnet")
        .unwrap()
        .args(["graph", "stats", road.to_str().unwrap(), "--weighted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertices      : 4"))
        .stdout(predicate::str::contains("Total weight  : 11.00"));

    Command::cargo_bin("civnet")
        .unwrap()
        .args([
            "graph",
            "path",
            road.to_str().unwrap(),
            "A",
            "D",
            "--weighted",
            "--block",
            "B",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 5.00"));

    Command::cargo_bin("civnet")
        .unwrap()
        .args(["graph", "route", water.to_str().unwrap(), "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: P1 -> a -> b -> c -> d -> e"))
        .stdout(predicate::str::contains("2: P2 -> x"));

    Command::cargo_bin("civnet")
        .unwrap()
        .args(["graph", "assign", water.to_str().unwrap(), "P1", "Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source vertex 'Q' is not in the network"));
}
