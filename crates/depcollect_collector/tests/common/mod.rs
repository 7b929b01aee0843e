use depcollect_collector::{collect_dependencies, CollectDependenciesConfig, Dependency};
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::ast::Program;
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::codegen::{Config as CodegenConfig, Emitter};
use swc_core::ecma::parser::{Parser, StringInput, Syntax, TsConfig};

pub struct Run {
  pub dependencies: Vec<Dependency>,
  pub dependency_map_name: String,
  pub code: String,
}

pub fn run(source: &str, config: CollectDependenciesConfig) -> Result<Run, String> {
  let cm: Lrc<SourceMap> = Default::default();
  let fm = cm.new_source_file(FileName::Custom("input.js".into()), source.to_string());

  let lexer = swc_core::ecma::parser::lexer::Lexer::new(
    Syntax::Typescript(TsConfig::default()),
    Default::default(),
    StringInput::from(&*fm),
    None,
  );
  let mut parser = Parser::new_from(lexer);
  let module = parser
    .parse_module()
    .unwrap_or_else(|err| panic!("fixture failed to parse: {err:?}"));

  let mut program = Program::Module(module);

  let result = collect_dependencies(&mut program, &cm, &config).map_err(|err| err.to_string())?;

  let mut buf = Vec::new();
  {
    let mut emitter = Emitter {
      cfg: CodegenConfig::default(),
      cm: cm.clone(),
      comments: None,
      wr: JsWriter::new(cm.clone(), "\n", &mut buf, None),
    };
    emitter.emit_program(&program).expect("codegen failed");
  }

  Ok(Run {
    dependencies: result.dependencies,
    dependency_map_name: result.dependency_map_name,
    code: String::from_utf8(buf).expect("emitted code is valid utf8"),
  })
}

pub fn default_config() -> CollectDependenciesConfig {
  CollectDependenciesConfig::new("metro-runtime/src/modules/asyncRequire")
}
