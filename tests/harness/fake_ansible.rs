use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell stand-ins for `ansible-runner` and `ansible-inventory`.
///
/// The runner fake writes a complete artifact directory and exits with
/// `PLAYRUN_FAKE_RC` (default 0). Both fakes append their arguments to a log.
/// The runner copies the `--cmdline "-e @file"` extravars of the latest run, if any.
pub struct FakeAnsible {
    dir: PathBuf,
}

const RUNNER_SCRIPT: &str = r#"#!/bin/sh
echo "$@" >> "@DIR@/runner.log"
rm -f "@DIR@/extravars.seen"
shift
PDD="$1"
shift
while [ $# -gt 0 ]; do
    case "$1" in
        -p) PLAYBOOK="$2"; shift 2 ;;
        --inventory) INVENTORY="$2"; shift 2 ;;
        --artifact-dir) ARTIFACT_DIR="$2"; shift 2 ;;
        --ident) IDENT="$2"; shift 2 ;;
        --limit) LIMIT="$2"; shift 2 ;;
        --cmdline) CMDLINE="$2"; shift 2 ;;
        *) shift ;;
    esac
done

case "$CMDLINE" in
    "-e @"*) cp "${CMDLINE#-e @}" "@DIR@/extravars.seen" ;;
esac
cp "$INVENTORY" "@DIR@/inventory.seen"

RC="${PLAYRUN_FAKE_RC:-0}"
if [ "$RC" = "0" ]; then STATUS=successful; else STATUS=failed; fi

OUT="$ARTIFACT_DIR/$IDENT"
mkdir -p "$OUT/job_events"
printf '%s\n' "$STATUS" > "$OUT/status"
printf '%s\n' "$RC" > "$OUT/rc"
printf 'PLAY [all] *****\nTASK [debug] *****\nok: [demo-host-3]\n' > "$OUT/stdout"
cat > "$OUT/job_events/1-start.json" <<JSON
{"event": "playbook_on_start", "counter": 1, "event_data": {}}
JSON
cat > "$OUT/job_events/3-stats.json" <<JSON
{"event": "playbook_on_stats", "counter": 3, "event_data": {"playbook": "hello.yml", "ok": {"demo-host-3": 2}, "changed": {"demo-host-3": 1}, "dark": {}, "failures": {}, "skipped": {}, "rescued": {}, "ignored": {}, "processed": {"demo-host-3": 1}}}
JSON
cat "$OUT/stdout"
exit "$RC"
"#;

const INVENTORY_SCRIPT: &str = r#"#!/bin/sh
echo "$@" >> "@DIR@/inventory.log"
if [ ! -f "$2" ]; then
    echo "Unable to parse $2 as an inventory source" >&2
    exit 1
fi
case "$3" in
    --list) echo '{"_meta": {"hostvars": {}}, "all": {"children": ["alpamayo", "ungrouped"]}}' ;;
    --graph) printf '@all:\n  |--@alpamayo:\n  |  |--demo-host-1\n' ;;
    --host) echo '{"ansible_host": "10.0.0.1"}' ;;
esac
exit 0
"#;

impl FakeAnsible {
    pub fn new(dir: &Path) -> Self {
        fs::create_dir_all(dir).expect("Failed to create fake bin dir");
        let fake = Self { dir: dir.to_path_buf() };
        install(&fake.runner_path(), RUNNER_SCRIPT, dir);
        install(&fake.inventory_path(), INVENTORY_SCRIPT, dir);
        fake
    }

    pub fn runner_path(&self) -> PathBuf {
        self.dir.join("ansible-runner")
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.dir.join("ansible-inventory")
    }

    pub fn runner_log(&self) -> String {
        fs::read_to_string(self.dir.join("runner.log")).unwrap_or_default()
    }

    pub fn inventory_log(&self) -> String {
        fs::read_to_string(self.dir.join("inventory.log")).unwrap_or_default()
    }

    /// Extra variables file passed to the latest runner invocation, if any.
    pub fn extravars_seen(&self) -> Option<String> {
        fs::read_to_string(self.dir.join("extravars.seen")).ok()
    }

    /// Inventory file content as the runner saw it.
    pub fn inventory_seen(&self) -> Option<String> {
        fs::read_to_string(self.dir.join("inventory.seen")).ok()
    }
}

fn install(path: &Path, script: &str, dir: &Path) {
    fs::write(path, script.replace("@DIR@", &dir.to_string_lossy()))
        .expect("Failed to write fake script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
