use std::path::Path;

use anyhow::bail;
use log::{info, warn};

use crate::data::discover::discover;
use crate::data::loader::load;
use crate::data::model::ComponentFile;
use crate::error::ViewerError;
use crate::present::Presenter;

// ---------------------------------------------------------------------------
// Run policy and outcome
// ---------------------------------------------------------------------------

/// What to do when a single file fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failure.
    #[default]
    FailFast,
    /// Log the failure, skip the file, and continue.
    KeepGoing,
}

/// Result of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of files handed to the presenter.
    pub presented: usize,
    /// Files skipped under [`ErrorPolicy::KeepGoing`].
    pub failures: Vec<(ComponentFile, ViewerError)>,
}

impl RunSummary {
    /// Turn the summary into the process outcome: success only when no file
    /// was skipped. Returns the number of files presented.
    pub fn into_result(self) -> anyhow::Result<usize> {
        if self.failures.is_empty() {
            return Ok(self.presented);
        }
        let names: Vec<String> = self.failures.iter().map(|(f, _)| f.name()).collect();
        bail!(
            "{} of {} component files failed to load: {}",
            self.failures.len(),
            self.failures.len() + self.presented,
            names.join(", ")
        )
    }
}

// ---------------------------------------------------------------------------
// Pipeline: discover → for each file: load → present
// ---------------------------------------------------------------------------

/// Show every component file in `dir`, one at a time.
///
/// Discovery and presenter failures always end the run. Load failures end it
/// under [`ErrorPolicy::FailFast`] and are collected under
/// [`ErrorPolicy::KeepGoing`].
pub fn run(
    dir: &Path,
    presenter: &mut dyn Presenter,
    policy: ErrorPolicy,
) -> Result<RunSummary, ViewerError> {
    let files = discover(dir)?;
    info!("{} component files in {}", files.len(), dir.display());

    let total = files.len();
    let mut summary = RunSummary::default();

    for (idx, file) in files.into_iter().enumerate() {
        let title = file.name();
        let grid = match load(&file) {
            Ok(grid) => grid,
            Err(e) if policy == ErrorPolicy::KeepGoing && e.is_per_file() => {
                warn!("Skipping {title}: {e}");
                summary.failures.push((file, e));
                continue;
            }
            Err(e) => return Err(e),
        };

        info!("Showing {title} ({}/{total})", idx + 1);
        presenter.begin(idx + 1, total);
        presenter.present(grid, &title)?;
        summary.presented += 1;
    }

    info!(
        "Done: {} shown, {} skipped",
        summary.presented,
        summary.failures.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ComponentGrid, GRID_LEN};
    use crate::testutil::write_component;
    use tempfile::TempDir;

    /// Records every grid instead of showing it.
    #[derive(Default)]
    struct RecordingPresenter {
        shown: Vec<(String, ComponentGrid)>,
        positions: Vec<(usize, usize)>,
    }

    impl Presenter for RecordingPresenter {
        fn begin(&mut self, position: usize, total: usize) {
            self.positions.push((position, total));
        }

        fn present(&mut self, grid: ComponentGrid, title: &str) -> Result<(), ViewerError> {
            self.shown.push((title.to_string(), grid));
            Ok(())
        }
    }

    struct FailingPresenter;

    impl Presenter for FailingPresenter {
        fn present(&mut self, _grid: ComponentGrid, title: &str) -> Result<(), ViewerError> {
            Err(ViewerError::Display {
                title: title.to_string(),
                message: "no display available".into(),
            })
        }
    }

    fn sequential() -> Vec<f32> {
        (0..GRID_LEN).map(|i| i as f32).collect()
    }

    #[test]
    fn presents_every_component_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        write_component(temp_dir.path(), "component_1.raw", &vec![0.0; GRID_LEN]);
        write_component(temp_dir.path(), "component_0.raw", &sequential());

        let mut presenter = RecordingPresenter::default();
        let summary = run(temp_dir.path(), &mut presenter, ErrorPolicy::FailFast).unwrap();

        assert_eq!(summary.presented, 2);
        assert!(summary.failures.is_empty());
        assert_eq!(presenter.positions, [(1, 2), (2, 2)]);

        let (title, first) = &presenter.shown[0];
        assert_eq!(title, "component_0.raw");
        assert_eq!(first.get(0, 0), Some(0.0));
        assert_eq!(first.get(27, 27), Some(783.0));

        let (title, second) = &presenter.shown[1];
        assert_eq!(title, "component_1.raw");
        assert!(second.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_directory_presents_nothing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("readme.txt"), b"hello").unwrap();

        let mut presenter = RecordingPresenter::default();
        let summary = run(temp_dir.path(), &mut presenter, ErrorPolicy::FailFast).unwrap();

        assert_eq!(summary.presented, 0);
        assert!(presenter.shown.is_empty());
    }

    #[test]
    fn bad_component_stops_the_run() {
        let temp_dir = TempDir::new().unwrap();
        write_component(temp_dir.path(), "component_bad.raw", &vec![1.0; 100]);

        let mut presenter = RecordingPresenter::default();
        let err = run(temp_dir.path(), &mut presenter, ErrorPolicy::FailFast).unwrap_err();

        assert!(matches!(err, ViewerError::ShapeMismatch { bytes: 400, .. }));
        assert!(presenter.shown.is_empty());
    }

    #[test]
    fn keep_going_skips_bad_components() {
        let temp_dir = TempDir::new().unwrap();
        write_component(temp_dir.path(), "component_a.raw", &sequential());
        write_component(temp_dir.path(), "component_b.raw", &vec![1.0; 1000]);
        write_component(temp_dir.path(), "component_c.raw", &vec![2.0; GRID_LEN]);

        let mut presenter = RecordingPresenter::default();
        let summary = run(temp_dir.path(), &mut presenter, ErrorPolicy::KeepGoing).unwrap();

        assert_eq!(summary.presented, 2);
        let titles: Vec<&str> = presenter.shown.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, ["component_a.raw", "component_c.raw"]);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0.name(), "component_b.raw");
        assert!(matches!(
            summary.failures[0].1,
            ViewerError::ShapeMismatch { bytes: 4000, .. }
        ));
    }

    #[test]
    fn presenter_failure_is_fatal_even_when_keeping_going() {
        let temp_dir = TempDir::new().unwrap();
        write_component(temp_dir.path(), "component_0.raw", &sequential());

        let err = run(temp_dir.path(), &mut FailingPresenter, ErrorPolicy::KeepGoing).unwrap_err();
        assert!(matches!(err, ViewerError::Display { .. }));
    }

    #[test]
    fn unreadable_directory_fails_before_presenting() {
        let temp_dir = TempDir::new().unwrap();
        let mut presenter = RecordingPresenter::default();
        let err = run(
            &temp_dir.path().join("missing"),
            &mut presenter,
            ErrorPolicy::KeepGoing,
        )
        .unwrap_err();

        assert!(matches!(err, ViewerError::Discovery { .. }));
        assert!(presenter.shown.is_empty());
    }

    #[test]
    fn clean_run_succeeds_and_zero_files_is_success() {
        let temp_dir = TempDir::new().unwrap();
        let mut presenter = RecordingPresenter::default();
        let summary = run(temp_dir.path(), &mut presenter, ErrorPolicy::FailFast).unwrap();
        assert_eq!(summary.into_result().unwrap(), 0);

        write_component(temp_dir.path(), "component_0.raw", &sequential());
        let summary = run(temp_dir.path(), &mut presenter, ErrorPolicy::FailFast).unwrap();
        assert_eq!(summary.into_result().unwrap(), 1);
    }

    #[test]
    fn skipped_files_turn_into_a_failed_run() {
        let temp_dir = TempDir::new().unwrap();
        write_component(temp_dir.path(), "component_0.raw", &sequential());
        write_component(temp_dir.path(), "component_short.raw", &vec![1.0; 100]);

        let mut presenter = RecordingPresenter::default();
        let summary = run(temp_dir.path(), &mut presenter, ErrorPolicy::KeepGoing).unwrap();
        let err = summary.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 of 2 component files failed to load: component_short.raw"
        );
    }

    #[cfg(unix)]
    #[test]
    fn keep_going_skips_unreadable_components() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        write_component(temp_dir.path(), "component_0.raw", &sequential());
        // reading a self-referencing link fails even as root
        symlink("component_loop.raw", temp_dir.path().join("component_loop.raw")).unwrap();

        let mut presenter = RecordingPresenter::default();
        let summary = run(temp_dir.path(), &mut presenter, ErrorPolicy::KeepGoing).unwrap();
        assert_eq!(summary.presented, 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0.name(), "component_loop.raw");
        assert!(matches!(summary.failures[0].1, ViewerError::Io { .. }));
        assert!(summary.into_result().is_err());

        let err = run(temp_dir.path(), &mut presenter, ErrorPolicy::FailFast).unwrap_err();
        assert!(matches!(err, ViewerError::Io { .. }));
    }
}
