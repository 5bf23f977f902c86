use std::{path::PathBuf, str::FromStr};

use strum::IntoEnumIterator;

use crate::{
    codegen::{GeneratedShape, ShapeSyntax},
    error::{Result, ShapeError},
    shape::{load_model, GenerateParams, MergeMode, Variant},
    info,
};

/// Help text, the accepted names are taken from the enums themselves.
pub fn usage() -> String {
    format!(
        "\
usage: voxel-shape-gen [MODEL_PATH] [--variant NAME]... [--name IDENT] [--syntax NAME] [--merge-mode NAME]

  MODEL_PATH         block model JSON to read (default: model.json)
  --variant NAME     {variants}, repeatable (default: all)
  --name IDENT       name of the generated declaration (default: SHAPE)
  --syntax NAME      {syntaxes} (default: {syntax})
  --merge-mode NAME  {modes} (default: {mode})
  --single-pass      same as --merge-mode {single_pass}",
        variants = names::<Variant>(),
        syntaxes = names::<ShapeSyntax>(),
        syntax = ShapeSyntax::default().as_ref(),
        modes = names::<MergeMode>(),
        mode = MergeMode::default().as_ref(),
        single_pass = MergeMode::SinglePass.as_ref(),
    )
}

fn names<E: IntoEnumIterator + AsRef<str>>() -> String {
    E::iter()
        .map(|e| e.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunParams {
    pub model_path: PathBuf,
    pub variants: Vec<Variant>,
    pub generate: GenerateParams,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.json"),
            variants: Variant::iter().collect(),
            generate: GenerateParams::default(),
        }
    }
}

impl RunParams {
    /// Builds params from command line arguments, the program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut params = Self::default();
        let mut variants: Vec<Variant> = Vec::new();
        let mut model_path = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--variant"     => variants.push(parse_value(&mut args, "--variant")?),
                "--syntax"      => params.generate.syntax = parse_value(&mut args, "--syntax")?,
                "--name"        => params.generate.declaration_name = java_identifier(next_value(&mut args, "--name")?)?,
                "--merge-mode"  => params.generate.merge_mode = parse_value(&mut args, "--merge-mode")?,
                "--single-pass" => params.generate.merge_mode = MergeMode::SinglePass,
                flag if flag.starts_with("--") => {
                    return Err(ShapeError::InvalidArgument(format!("unknown flag '{flag}'")));
                }
                path => {
                    if model_path.replace(PathBuf::from(path)).is_some() {
                        return Err(ShapeError::InvalidArgument(format!("unexpected extra argument '{path}'")));
                    }
                }
            }
        }

        if let Some(path) = model_path {
            params.model_path = path;
        }
        if !variants.is_empty() {
            params.variants = variants;
        }
        Ok(params)
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| ShapeError::InvalidArgument(format!("{flag} expects a value")))
}

fn parse_value<T: FromStr>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T> {
    let value = next_value(args, flag)?;
    value
        .parse()
        .map_err(|_| ShapeError::InvalidArgument(format!("invalid value '{value}' for {flag}")))
}

fn java_identifier(name: String) -> Result<String> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .map_or(false, |c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if valid {
        Ok(name)
    } else {
        Err(ShapeError::InvalidArgument(format!("'{name}' is not a valid declaration name")))
    }
}

/// Loads the model once and generates every requested variant from it.
pub fn run(params: &RunParams) -> Result<Vec<GeneratedShape>> {
    let boxes = load_model(&params.model_path)?;
    info!("generating {} variant(s) from {} boxes", params.variants.len(), boxes.len());
    params
        .variants
        .iter()
        .map(|variant| variant.generate(&boxes, &params.generate))
        .collect()
}

/// Text printed to stderr when a run fails, usage is appended for command line mistakes.
pub fn failure_message(err: &ShapeError) -> String {
    match err {
        ShapeError::InvalidArgument(_) => format!("error: {}\n{}", err, usage()),
        _ => format!("error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let params = RunParams::from_args(args(&[])).unwrap();
        assert_eq!(params, RunParams::default());
        assert_eq!(params.variants, [Variant::Merge, Variant::ExpandHorizontal, Variant::ExpandVertical]);
        assert_eq!(params.model_path, PathBuf::from("model.json"));
    }

    #[test]
    fn all_flags() {
        let params = RunParams::from_args(args(&[
            "models/lamp.json",
            "--variant", "expand-vertical",
            "--variant", "merge",
            "--name", "LAMP_SHAPE",
            "--syntax", "yarn",
            "--single-pass",
        ])).unwrap();
        assert_eq!(params.model_path, PathBuf::from("models/lamp.json"));
        assert_eq!(params.variants, [Variant::ExpandVertical, Variant::Merge]);
        assert_eq!(params.generate.declaration_name, "LAMP_SHAPE");
        assert_eq!(params.generate.syntax, ShapeSyntax::Yarn);
        assert_eq!(params.generate.merge_mode, MergeMode::SinglePass);
    }

    #[test]
    fn merge_mode_flag() {
        let params = RunParams::from_args(args(&["--merge-mode", "single-pass"])).unwrap();
        assert_eq!(params.generate.merge_mode, MergeMode::SinglePass);
        let params = RunParams::from_args(args(&["--single-pass", "--merge-mode", "fixpoint"])).unwrap();
        assert_eq!(params.generate.merge_mode, MergeMode::Fixpoint);
    }

    #[test]
    fn usage_lists_accepted_names() {
        let text = usage();
        assert!(text.contains("merge | expand-horizontal | expand-vertical"));
        assert!(text.contains("mojang | yarn (default: mojang)"));
        assert!(text.contains("single-pass | fixpoint (default: fixpoint)"));
    }

    #[test]
    fn failure_message_reports_error_once() {
        let message = failure_message(&ShapeError::NoGeometry);
        assert_eq!(message, "error: model contains no geometry");

        let message = failure_message(&ShapeError::InvalidArgument("unknown flag '--x'".to_string()));
        assert_eq!(message.matches("unknown flag").count(), 1);
        assert!(message.starts_with("error: invalid argument: unknown flag '--x'\nusage: voxel-shape-gen"));
    }

    #[test]
    fn bad_arguments_rejected() {
        for bad in [
            &["--bogus"][..],
            &["--variant"][..],
            &["--variant", "sideways"][..],
            &["--syntax", "intermediary"][..],
            &["--merge-mode", "twice"][..],
            &["--name", "1SHAPE"][..],
            &["--name", "SHA PE"][..],
            &["a.json", "b.json"][..],
        ] {
            assert!(
                matches!(RunParams::from_args(args(bad)), Err(ShapeError::InvalidArgument(_))),
                "{:?}",
                bad
            );
        }
    }
}
