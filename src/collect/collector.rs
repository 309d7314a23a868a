//! Media collection: discovery, matching and copying.

use std::path::PathBuf;

use crate::collect::confirm::{Confirm, OVERWRITE_PROMPT};
use crate::collect::report::{Notice, Report};
use crate::collect::state::CollectStats;
use crate::config::ReferenceMode;
use crate::discovery::{find_fixtures, Fixture, SearchRoot};
use crate::error::{Error, Result};
use crate::fs::{copy_file, destination_path, is_same_file, source_path};
use crate::media::{MediaReference, ReferencePattern};
use crate::output::create_spinner;

/// Behavior switches for a collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Ask for confirmation before touching the media root.
    pub interactive: bool,
    /// Report what would be copied without writing anything.
    pub dry_run: bool,
    /// Hide the discovery spinner.
    pub quiet: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            dry_run: false,
            quiet: false,
        }
    }
}

/// Copies media referenced by fixtures into the media root.
#[derive(Debug)]
pub struct MediaCollector {
    media_root: PathBuf,
    pattern: ReferencePattern,
    options: CollectOptions,
}

impl MediaCollector {
    pub fn new(media_root: PathBuf, mode: ReferenceMode, options: CollectOptions) -> Self {
        Self {
            media_root,
            pattern: ReferencePattern::new(mode),
            options,
        }
    }

    /// Run the whole collection over `roots`.
    ///
    /// In interactive mode nothing is read or written until `confirm` agrees.
    /// Missing sources, rejected references and sources that already are
    /// their destination go to `report` and are skipped; filesystem errors
    /// while copying stop the run.
    pub fn run(
        &self,
        roots: &[SearchRoot],
        confirm: &mut dyn Confirm,
        report: &mut dyn Report,
    ) -> Result<CollectStats> {
        let needs_confirmation = self.options.interactive && !self.options.dry_run;
        if needs_confirmation && !confirm.confirm(OVERWRITE_PROMPT)? {
            return Err(Error::Aborted);
        }

        tracing::debug!(
            "Collecting media into {} ({} references)",
            self.media_root.display(),
            self.pattern.mode()
        );

        let fixtures = if self.options.quiet {
            find_fixtures(roots)
        } else {
            let spinner = create_spinner("Scanning fixture directories...");
            let fixtures = find_fixtures(roots);
            spinner.finish_and_clear();
            fixtures
        };
        tracing::info!("Found {} fixture file(s)", fixtures.len());

        let mut stats = CollectStats::default();
        for fixture in &fixtures {
            self.handle_fixture(fixture, &mut stats, report)?;
        }

        Ok(stats)
    }

    /// Copy every media file referenced by one fixture.
    pub fn handle_fixture(
        &self,
        fixture: &Fixture,
        stats: &mut CollectStats,
        report: &mut dyn Report,
    ) -> Result<()> {
        let bytes = std::fs::read(&fixture.path)?;
        let text = String::from_utf8_lossy(&bytes);
        let references = self.pattern.find_references(&text);
        stats.add_fixture(references.len());

        if references.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            "{} reference(s) in {}",
            references.len(),
            fixture.path.display()
        );

        for raw in references {
            let reference = match MediaReference::parse(raw) {
                Ok(reference) => reference,
                Err(error) => {
                    stats.increment_rejected();
                    report.notice(&Notice::Rejected {
                        error: &error,
                        fixture: &fixture.path,
                    });
                    continue;
                }
            };

            let source = source_path(&fixture.root, &reference);
            if !source.exists() {
                stats.increment_missing();
                report.notice(&Notice::Missing {
                    reference: &reference,
                    fixture: &fixture.path,
                    source: &source,
                });
                continue;
            }

            let destination = destination_path(&self.media_root, &reference);
            if is_same_file(&source, &destination) {
                stats.increment_same_file();
                report.notice(&Notice::SameFile {
                    reference: &reference,
                    path: &source,
                });
                continue;
            }

            if self.options.dry_run {
                stats.add_copied(std::fs::metadata(&source)?.len());
                report.notice(&Notice::WouldCopy {
                    reference: &reference,
                    destination: &destination,
                });
                continue;
            }

            let copied = copy_file(&source, &destination)?;
            stats.add_copied(copied);
            report.notice(&Notice::Copied {
                reference: &reference,
                destination: &destination,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Keeps every notice as `(is_warning, message)`.
    #[derive(Default)]
    struct Notices(Vec<(bool, String)>);

    impl Report for Notices {
        fn notice(&mut self, notice: &Notice<'_>) {
            self.0.push((notice.is_warning(), notice.to_string()));
        }
    }

    impl Notices {
        fn warnings(&self) -> Vec<&str> {
            self.0
                .iter()
                .filter(|(warning, _)| *warning)
                .map(|(_, message)| message.as_str())
                .collect()
        }
    }

    struct Answer {
        value: bool,
        asked: u32,
    }

    impl Answer {
        fn new(value: bool) -> Self {
            Self { value, asked: 0 }
        }
    }

    impl Confirm for Answer {
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            self.asked += 1;
            Ok(self.value)
        }
    }

    struct Layout {
        _dir: TempDir,
        root: PathBuf,
        media_root: PathBuf,
    }

    fn layout() -> Layout {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("fixtures");
        let media_root = dir.path().join("live-media");
        fs::create_dir_all(&root).unwrap();
        Layout {
            root,
            media_root,
            _dir: dir,
        }
    }

    fn write(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn collector(layout: &Layout, mode: ReferenceMode, options: CollectOptions) -> MediaCollector {
        MediaCollector::new(layout.media_root.clone(), mode, options)
    }

    fn silent(interactive: bool) -> CollectOptions {
        CollectOptions {
            interactive,
            dry_run: false,
            quiet: true,
        }
    }

    #[test]
    fn test_copies_referenced_file() {
        let layout = layout();
        write(
            &layout.root.join("posts.json"),
            br#"[{"fields": {"cover": "images/x.png"}}]"#,
        );
        write(&layout.root.join("media/images/x.png"), b"png");

        let roots = vec![SearchRoot::configured(&layout.root)];
        let stats = collector(&layout, ReferenceMode::Permissive, silent(false))
            .run(&roots, &mut Answer::new(false), &mut Notices::default())
            .unwrap();

        assert_eq!(fs::read(layout.media_root.join("images/x.png")).unwrap(), b"png");
        assert_eq!(stats.fixtures_scanned, 1);
        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.bytes_copied, 3);
    }

    #[test]
    fn test_missing_source_is_not_fatal() {
        let layout = layout();
        write(
            &layout.root.join("posts.yaml"),
            b"- cover: images/missing.png\n- cover: images/present.png\n",
        );
        write(&layout.root.join("media/images/present.png"), b"ok");

        let roots = vec![SearchRoot::configured(&layout.root)];
        let mut notices = Notices::default();
        let stats = collector(&layout, ReferenceMode::Permissive, silent(false))
            .run(&roots, &mut Answer::new(false), &mut notices)
            .unwrap();

        assert!(!layout.media_root.join("images/missing.png").exists());
        assert!(layout.media_root.join("images/present.png").exists());
        assert_eq!(stats.missing_sources, 1);
        assert_eq!(stats.files_copied, 1);

        let fixture = layout.root.join("posts.yaml");
        let source = layout.root.join("media").join("images/missing.png");
        assert_eq!(
            notices.warnings(),
            vec![format!(
                "File path (images/missing.png) found in {} but not on disk in ({})",
                fixture.display(),
                source.display()
            )]
        );
    }

    #[test]
    fn test_media_root_inside_search_root_keeps_files() {
        let layout = layout();
        write(&layout.root.join("posts.json"), br#"{"cover": "images/x.png"}"#);
        write(&layout.root.join("media/images/x.png"), b"precious-bytes");

        let roots = vec![SearchRoot::configured(&layout.root)];
        let mut notices = Notices::default();
        let stats = MediaCollector::new(
            layout.root.join("media"),
            ReferenceMode::Permissive,
            silent(false),
        )
        .run(&roots, &mut Answer::new(false), &mut notices)
        .unwrap();

        assert_eq!(
            fs::read(layout.root.join("media/images/x.png")).unwrap(),
            b"precious-bytes"
        );
        assert_eq!(stats.same_file, 1);
        assert_eq!(stats.files_copied, 0);
        assert_eq!(notices.warnings().len(), 1);
        assert!(notices.warnings()[0].contains("same file"));
    }

    #[test]
    fn test_declined_prompt_copies_nothing() {
        let layout = layout();
        write(&layout.root.join("posts.json"), br#""images/x.png""#);
        write(&layout.root.join("media/images/x.png"), b"png");

        let mut answer = Answer::new(false);
        let roots = vec![SearchRoot::configured(&layout.root)];
        let result = collector(&layout, ReferenceMode::Permissive, silent(true)).run(
            &roots,
            &mut answer,
            &mut Notices::default(),
        );

        assert!(matches!(result, Err(Error::Aborted)));
        assert_eq!(answer.asked, 1);
        assert!(!layout.media_root.exists());
    }

    #[test]
    fn test_accepted_prompt_asked_once_and_overwrites() {
        let layout = layout();
        write(&layout.root.join("a.json"), br#""images/x.png""#);
        write(&layout.root.join("b.json"), br#""docs/y.pdf""#);
        write(&layout.root.join("media/images/x.png"), b"new");
        write(&layout.root.join("media/docs/y.pdf"), b"pdf");
        write(&layout.media_root.join("images/x.png"), b"old");

        let mut answer = Answer::new(true);
        let roots = vec![SearchRoot::configured(&layout.root)];
        let collector = collector(&layout, ReferenceMode::Permissive, silent(true));
        collector.run(&roots, &mut answer, &mut Notices::default()).unwrap();
        collector.run(&roots, &mut answer, &mut Notices::default()).unwrap();

        assert_eq!(answer.asked, 2);
        assert_eq!(fs::read(layout.media_root.join("images/x.png")).unwrap(), b"new");
        assert!(layout.media_root.join("docs/y.pdf").exists());
    }

    #[test]
    fn test_strict_mode_requires_prefix() {
        let layout = layout();
        write(
            &layout.root.join("posts.json"),
            b"\"images/plain.png\"\n\"media://images/prefixed.png\"\n",
        );
        write(&layout.root.join("media/images/plain.png"), b"a");
        write(&layout.root.join("media/images/prefixed.png"), b"b");

        let roots = vec![SearchRoot::configured(&layout.root)];
        let stats = collector(&layout, ReferenceMode::Strict, silent(false))
            .run(&roots, &mut Answer::new(false), &mut Notices::default())
            .unwrap();

        assert!(!layout.media_root.join("images/plain.png").exists());
        assert!(layout.media_root.join("images/prefixed.png").exists());
        assert_eq!(stats.references_found, 1);
    }

    #[test]
    fn test_non_fixture_files_ignored() {
        let layout = layout();
        write(&layout.root.join("notes.txt"), br#""images/x.png""#);
        write(&layout.root.join("media/images/x.png"), b"png");

        let roots = vec![SearchRoot::configured(&layout.root)];
        let stats = collector(&layout, ReferenceMode::Permissive, silent(false))
            .run(&roots, &mut Answer::new(false), &mut Notices::default())
            .unwrap();

        assert_eq!(stats.fixtures_scanned, 0);
        assert!(!layout.media_root.exists());
    }

    #[test]
    fn test_sources_resolve_against_root_not_fixture_dir() {
        let layout = layout();
        write(&layout.root.join("nested/deep/posts.json"), br#""images/x.png""#);
        write(&layout.root.join("nested/deep/media/images/x.png"), b"wrong");
        write(&layout.root.join("media/images/x.png"), b"right");

        let roots = vec![SearchRoot::configured(&layout.root)];
        collector(&layout, ReferenceMode::Permissive, silent(false))
            .run(&roots, &mut Answer::new(false), &mut Notices::default())
            .unwrap();

        assert_eq!(fs::read(layout.media_root.join("images/x.png")).unwrap(), b"right");
    }

    #[test]
    fn test_traversal_reference_rejected() {
        let layout = layout();
        write(&layout.root.join("posts.json"), br#""../secret/key.pem""#);

        let roots = vec![SearchRoot::configured(&layout.root)];
        let stats = collector(&layout, ReferenceMode::Permissive, silent(false))
            .run(&roots, &mut Answer::new(false), &mut Notices::default())
            .unwrap();

        assert_eq!(stats.rejected_references, 1);
        assert_eq!(stats.files_copied, 0);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let layout = layout();
        write(&layout.root.join("posts.json"), br#""images/x.png""#);
        write(&layout.root.join("media/images/x.png"), b"png");

        let mut answer = Answer::new(false);
        let options = CollectOptions {
            interactive: true,
            dry_run: true,
            quiet: true,
        };
        let roots = vec![SearchRoot::configured(&layout.root)];
        let stats = collector(&layout, ReferenceMode::Permissive, options)
            .run(&roots, &mut answer, &mut Notices::default())
            .unwrap();

        assert_eq!(answer.asked, 0);
        assert_eq!(stats.files_copied, 1);
        assert!(!layout.media_root.exists());
    }

    #[test]
    fn test_copy_error_halts_run() {
        let layout = layout();
        write(&layout.root.join("posts.json"), br#""images/x.png""#);
        write(&layout.root.join("media/images/x.png"), b"png");
        // A file where the destination directory should be.
        write(&layout.media_root.join("images"), b"not a dir");

        let roots = vec![SearchRoot::configured(&layout.root)];
        let result = collector(&layout, ReferenceMode::Permissive, silent(false))
            .run(&roots, &mut Answer::new(false), &mut Notices::default());

        assert!(matches!(result, Err(Error::Copy { .. })));
    }
}
