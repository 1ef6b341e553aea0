use calltree_extractor::{
    extract, Extractor, ExtractorConfig, FunctionKind, FunctionRecord, Language,
};
use pretty_assertions::assert_eq;

const PYTHON_SERVICE: &str = r#"
import os

def main():
    config = load_config()
    run(config)

def load_config():
    return parse(os.environ)

def run(config):
    def step():
        work(config)
    step()
    print("done")

class Worker:
    def work(self, config):
        self.helper()
        validate(config)
"#;

fn find<'a>(records: &'a [FunctionRecord], name: &str) -> &'a FunctionRecord {
    records
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("missing record for {name}"))
}

fn calls(record: &FunctionRecord) -> Vec<&str> {
    record.calls.iter().map(String::as_str).collect()
}

#[test]
fn python_definitions_and_calls() {
    let records = extract(PYTHON_SERVICE, "service/app.py", "python");

    assert_eq!(
        records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["main", "load_config", "run", "step", "work"]
    );
    assert_eq!(find(&records, "main").line, 4);
    assert_eq!(calls(find(&records, "main")), vec!["load_config", "run"]);
    assert_eq!(calls(find(&records, "load_config")), vec!["parse"]);
    assert_eq!(find(&records, "work").kind, FunctionKind::MethodDefinition);
    // attribute calls (`self.helper()`) are not simple identifiers
    assert_eq!(calls(find(&records, "work")), vec!["validate"]);
}

#[test]
fn nested_calls_belong_to_innermost_function() {
    let records = extract(PYTHON_SERVICE, "service/app.py", "python");

    assert_eq!(calls(find(&records, "run")), vec!["print", "step"]);
    assert_eq!(calls(find(&records, "step")), vec!["work"]);
    assert_eq!(find(&records, "step").kind, FunctionKind::FunctionDeclaration);
}

#[test]
fn comment_only_python_file_is_empty() {
    assert!(extract("# nothing\n# to see\n", "empty.py", "python").is_empty());
}

#[test]
fn malformed_rust_still_yields_partial_records() {
    let src = "fn ok() { helper(); }\nfn broken( {\n";
    let records = extract(src, "src/lib.rs", "rust");
    let ok = find(&records, "ok");
    assert_eq!(calls(ok), vec!["helper"]);
}

#[test]
fn structured_typescript_on_request() {
    let src = r#"
export class Repo {
  async fetchAll(): Promise<void> {
    const rows = await query("select");
    normalize(rows);
  }
}

export const normalize = (rows: Row[]) => rows.map(toModel);

function toModel(row: Row) {
  return build(row);
}
"#;
    let extractor = Extractor::new(ExtractorConfig {
        prefer_structured: true,
        ..Default::default()
    });
    let records = extractor.extract(src, "src/repo.ts", Language::TypeScript);

    assert_eq!(
        records
            .iter()
            .map(|r| (r.name.as_str(), r.kind))
            .collect::<Vec<_>>(),
        vec![
            ("fetchAll", FunctionKind::MethodDefinition),
            ("normalize", FunctionKind::ArrowFunction),
            ("toModel", FunctionKind::FunctionDeclaration),
        ]
    );
    assert_eq!(calls(find(&records, "fetchAll")), vec!["normalize", "query"]);
    // `rows.map(...)` is a member call, `toModel` is only passed as a value
    assert!(find(&records, "normalize").calls.is_empty());
    assert_eq!(calls(find(&records, "toModel")), vec!["build"]);
}
