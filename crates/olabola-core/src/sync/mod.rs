use std::collections::HashSet;

use log::{debug, info, warn};

use crate::config::GridConfig;
use crate::frontmatter::MovieMeta;
use crate::grid::{GridBlock, GridRecord};
use crate::model::{NoteFile, SyncReport};
use crate::poster;
use crate::vault::NoteStore;

mod outcome;


pub use outcome::{Result, SkipReason, SyncError, SyncOutcome};

/// A note whose frontmatter carries an `isbn`.
#[derive(Debug, Clone)]
struct Candidate {
    note: NoteFile,
    meta: MovieMeta,
}

/// Appends movie notes missing from the index note's grid block and moves
/// their posters into the configured folder.
///
/// Nothing is cached between runs: every call re-reads the vault. The run is
/// sequential and assumes nobody else touches the vault meanwhile.
pub struct GridSynchronizer<'a> {
    store: &'a dyn NoteStore,
    config: &'a GridConfig,
}

impl<'a> GridSynchronizer<'a> {
    pub fn new(store: &'a dyn NoteStore, config: &'a GridConfig) -> Self {
        Self { store, config }
    }

    pub fn sync(&self) -> Result<SyncOutcome> {
        let notes = self.store.list_notes();
        let candidates = self.collect_candidates(&notes);
        debug!("{} note(s) carry an isbn", candidates.len());

        let Some(index) = notes.iter().find(|n| n.title == self.config.index_note) else {
            let reason = SkipReason::IndexNoteMissing {
                title: self.config.index_note.clone(),
            };
            warn!("{}", reason);
            return Ok(SyncOutcome::Skipped(reason));
        };

        let content = self
            .store
            .read_content(&index.path)
            .map_err(|source| SyncError::Read {
                path: index.path.clone(),
                source,
            })?;

        let Some(block) = GridBlock::find(&content, &self.config.fence_tag) else {
            let reason = SkipReason::GridBlockMissing {
                note: index.title.clone(),
                tag: self.config.fence_tag.clone(),
            };
            warn!("{}", reason);
            return Ok(SyncOutcome::Skipped(reason));
        };

        let existing = block.titles();
        let mut seen = HashSet::new();
        let new_movies: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| !existing.contains(&c.note.title))
            .filter(|c| seen.insert(c.note.title.clone()))
            .collect();

        if new_movies.is_empty() {
            info!("All movies already in grid");
            return Ok(SyncOutcome::UpToDate);
        }

        let mut moved = 0;
        let mut lines = Vec::with_capacity(new_movies.len());
        for movie in &new_movies {
            let poster = match &movie.meta.poster {
                Some(link) => {
                    let (reference, did_move) = self.relocate_poster(&movie.note, link)?;
                    if did_move {
                        moved += 1;
                    }
                    reference
                }
                None => String::new(),
            };

            let record = GridRecord {
                title: movie.note.title.clone(),
                poster,
                date: movie.meta.date.clone(),
            };
            debug!("New grid row: {}", record.to_line());
            lines.push(record.to_line());
        }

        let updated = block.splice(&content, &lines);
        self.store
            .write_content(&index.path, &updated)
            .map_err(|source| SyncError::Write {
                path: index.path.clone(),
                source,
            })?;

        let report = SyncReport {
            added: lines.len(),
            moved,
        };
        info!(
            "Added {} movie(s) to \"{}\", moved {} poster(s)",
            report.added, index.title, report.moved
        );
        Ok(SyncOutcome::Updated(report))
    }

    fn collect_candidates(&self, notes: &[NoteFile]) -> Vec<Candidate> {
        notes
            .iter()
            .filter_map(|note| {
                let fm = self.store.read_metadata(note)?;
                let meta = MovieMeta::from_frontmatter(&fm);
                meta.has_isbn().then(|| Candidate {
                    note: note.clone(),
                    meta,
                })
            })
            .collect()
    }

    /// Returns the grid reference for the poster and whether the file was moved.
    ///
    /// A link that resolves neither to a file nor to an already relocated
    /// poster yields an empty reference.
    fn relocate_poster(&self, note: &NoteFile, link: &str) -> Result<(String, bool)> {
        let Some(source) = self.store.resolve_link(link, note) else {
            // Another note may have moved this file earlier in the run.
            let destination = poster::destination(&self.config.posters_dir, link);
            if self.store.path_exists(&destination) {
                debug!("Poster {} of \"{}\" already relocated", link, note.title);
                self.repoint_note(note, link, &destination)?;
                let reference = poster::grid_reference(&self.config.poster_link_prefix, link);
                return Ok((reference, false));
            }
            debug!("Poster {} of \"{}\" not found", link, note.title);
            return Ok((String::new(), false));
        };

        let destination = poster::destination(&self.config.posters_dir, &source);
        let reference = poster::grid_reference(&self.config.poster_link_prefix, &source);

        if self.store.path_exists(&destination) {
            debug!("Poster {} already in place", destination);
            return Ok((reference, false));
        }

        let posters_dir = self.config.posters_dir.trim_end_matches('/');
        if !posters_dir.is_empty() && !self.store.path_exists(posters_dir) {
            self.store
                .make_directory(posters_dir)
                .map_err(|source| SyncError::CreateDir {
                    path: posters_dir.to_string(),
                    source,
                })?;
        }

        self.store
            .move_file(&source, &destination)
            .map_err(|e| SyncError::Move {
                from: source.clone(),
                to: destination.clone(),
                source: e,
            })?;
        debug!("Moved poster {} -> {}", source, destination);

        self.repoint_note(note, link, &destination)?;
        Ok((reference, true))
    }

    /// Rewrite the note's `poster: <link>` line to `destination`.
    fn repoint_note(&self, note: &NoteFile, link: &str, destination: &str) -> Result<()> {
        let content = self
            .store
            .read_content(&note.path)
            .map_err(|source| SyncError::Read {
                path: note.path.clone(),
                source,
            })?;
        match poster::rewrite_reference(&content, link, destination) {
            Some(updated) => {
                self.store
                    .write_content(&note.path, &updated)
                    .map_err(|source| SyncError::Write {
                        path: note.path.clone(),
                        source,
                    })?;
            }
            None => warn!(
                "\"{}\" still references {}: no literal `poster: {}` line",
                note.title, link, link
            ),
        }
        Ok(())
    }
}
