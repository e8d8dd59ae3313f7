use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use byzcal_core::{
    HtmlRenderer, MonthLabel, OutputFormat, ReadingsLink, Render, TextRenderer, parse_rows,
};
use owo_colors::OwoColorize;
use tracing::{info, warn};

use super::Workspace;

pub fn run(base_dir: Option<PathBuf>, file: &Path, formats: &[OutputFormat]) -> Result<()> {
    let workspace = Workspace::load(base_dir)?;

    for path in render_file(&workspace, file, formats)? {
        println!(
            "{} {}",
            "Output written to".green(),
            workspace.display_path(&path).display()
        );
    }

    Ok(())
}

/// Render one sheet in every requested format and return the written paths.
///
/// All documents are rendered before anything is written, so a failing
/// sheet leaves no output behind.
pub fn render_file(
    workspace: &Workspace,
    file: &Path,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>> {
    let input = workspace.resolve_input(file)?;
    let contents = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let rows = parse_rows(&contents);
    info!(file = %input.display(), rows = rows.len(), "parsed sheet");

    let documents: Vec<(OutputFormat, String)> = formats
        .iter()
        .map(|&format| {
            let renderer = renderer_for(workspace, format, file);
            (renderer.format(), renderer.render(&rows))
        })
        .collect();

    let mut written = Vec::with_capacity(documents.len());
    for (format, document) in documents {
        let dir = workspace.output_dir(format);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let path = workspace.output_path(format, &input);
        fs::write(&path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(format = %format, path = %path.display(), "wrote output");
        written.push(path);
    }

    Ok(written)
}

fn renderer_for(workspace: &Workspace, format: OutputFormat, file: &Path) -> Box<dyn Render> {
    let config = &workspace.config;
    let link = ReadingsLink::new(config.bible_version.clone());

    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(link)),
        OutputFormat::Html => Box::new(
            HtmlRenderer::new(month_label(file, &config.year), link)
                .with_title(config.title.clone())
                .with_escaping(config.escape_html),
        ),
    }
}

/// Month label from the sheet name, falling back to the whole name when it
/// does not follow `<month>_<year>.csv`.
fn month_label(file: &Path, year: &str) -> MonthLabel {
    let name = file.to_string_lossy();

    MonthLabel::from_file_name(&name, year).unwrap_or_else(|e| {
        warn!("{e}; using the whole file name as the month");
        MonthLabel::from_file_name_lossy(&name, year)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use byzcal_core::config::ByzcalConfig;

    const SHEET: &str = "\
Date,Commemorations,Readings,Tone,Fasting,Vestments,Rank,Troparion,Kontakion,Prokeimenon,Alleluia,About Today,Remarks
2026-01-01,Circumcision|St. Basil the Great,\"Col 2:8-12|Luke 2:20-21, Luke 2:40-52\",,,,,,,,,,Vespers on the eve
2026-01-02,,1 Tim 6:11-16
";

    fn workspace_with_sheet(name: &str, config: ByzcalConfig) -> (tempfile::TempDir, Workspace) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(name), SHEET).unwrap();
        let workspace = Workspace::new(Some(dir.path().to_path_buf()), config).unwrap();
        (dir, workspace)
    }

    #[test]
    fn test_render_file_writes_both_outputs() {
        let (dir, workspace) = workspace_with_sheet("january_2026.csv", ByzcalConfig::default());

        let written =
            render_file(&workspace, Path::new("january_2026.csv"), &OutputFormat::ALL).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("txt").join("january_2026.txt"),
                dir.path().join("html").join("january_2026.html"),
            ]
        );

        let text = fs::read_to_string(&written[0]).unwrap();
        assert_eq!(
            text,
            "2026-01-01\n\
             Commemorations: Circumcision, St. Basil the Great\n\
             Link to readings: https://www.biblegateway.com/passage/?search=Col%202%3A8-12%2CLuke%202%3A20-21%2CLuke%202%3A40-52&version=RSVCE\n\
             Remarks: Vespers on the eve\n"
        );

        let html = fs::read_to_string(&written[1]).unwrap();
        assert!(html.contains("<title>Byzantine Calendar - January 2026</title>"));
        assert!(html.contains("<div class=\"date\">2026-01-01</div>"));
        assert!(!html.contains("2026-01-02"));
    }

    #[test]
    fn test_render_file_single_format() {
        let (dir, workspace) = workspace_with_sheet("january_2026.csv", ByzcalConfig::default());

        render_file(&workspace, Path::new("january_2026.csv"), &[OutputFormat::Html]).unwrap();

        assert!(dir.path().join("html").join("january_2026.html").is_file());
        assert!(!dir.path().join("txt").exists());
    }

    #[test]
    fn test_render_file_missing_input_writes_nothing() {
        let (dir, workspace) = workspace_with_sheet("january_2026.csv", ByzcalConfig::default());

        let err = render_file(&workspace, Path::new("february_2026.csv"), &OutputFormat::ALL)
            .unwrap_err();

        assert_eq!(err.to_string(), "File february_2026.csv not found");
        assert!(!dir.path().join("txt").exists());
        assert!(!dir.path().join("html").exists());
    }

    #[test]
    fn test_render_file_uses_config() {
        let config = ByzcalConfig {
            text_dir: PathBuf::from("out/text"),
            bible_version: "NABRE".to_string(),
            ..ByzcalConfig::default()
        };
        let (dir, workspace) = workspace_with_sheet("january_2026.csv", config);

        let written =
            render_file(&workspace, Path::new("january_2026.csv"), &[OutputFormat::Text]).unwrap();

        assert_eq!(written[0], dir.path().join("out/text/january_2026.txt"));
        let text = fs::read_to_string(&written[0]).unwrap();
        assert!(text.contains("&version=NABRE\n"), "Got:\n{}", text);
    }

    #[test]
    fn test_month_label_falls_back_for_unconventional_names() {
        assert_eq!(
            month_label(Path::new("january_2026.csv"), "2026").to_string(),
            "January 2026"
        );
        assert_eq!(month_label(Path::new("feasts.csv"), "2026").to_string(), "Feasts.csv 2026");
    }
}
