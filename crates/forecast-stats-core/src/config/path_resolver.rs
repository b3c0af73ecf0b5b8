use std::path::{Path, PathBuf};

/// Resolves configured paths against the repository root.
#[derive(Clone, Debug)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    pub fn new(repo_root: &Path) -> Self {
        Self {
            base_dir: repo_root.to_path_buf(),
        }
    }

    pub fn resolve(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            return p.to_path_buf();
        }
        self.join_clean(p)
    }

    fn join_clean(&self, rel: &Path) -> PathBuf {
        let joined = self.base_dir.join(rel);

        let mut out = PathBuf::new();
        for c in joined.components() {
            use std::path::Component::*;
            match c {
                CurDir => {}
                ParentDir => match out.components().next_back() {
                    Some(Normal(_)) => {
                        out.pop();
                    }
                    Some(RootDir) | Some(Prefix(_)) => {}
                    _ => out.push(".."),
                },
                RootDir | Prefix(_) | Normal(_) => out.push(c.as_os_str()),
            }
        }
        if out.as_os_str().is_empty() {
            out.push(".");
        }
        out
    }
}
