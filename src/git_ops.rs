use crate::error::{ReleaseError, Result};
use git2::Repository;

/// Wrapper around a git2 Repository for the tag operations a release needs.
///
/// Supplies the existing tag list the release planner consumes and records
/// the planned release as a new tag. The planner itself never touches this
/// type; main wires the two together.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository in the current directory or its parents
    pub fn new() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(GitRepo { repo })
    }

    /// All tag names in the repository.
    ///
    /// Order is whatever git reports; callers sort by version where needed.
    pub fn list_tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;
        Ok(names.iter().flatten().map(|s| s.to_string()).collect())
    }

    /// Creates a lightweight tag on the current HEAD commit
    pub fn create_tag(&self, tag_name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(tag_name, head.as_object(), false)?;
        Ok(())
    }

    /// Pushes a tag to the given remote.
    ///
    /// Authenticates via SSH keys from ~/.ssh/ or falls back to default
    /// credentials.
    pub fn push_tag(&self, tag_name: &str, remote_name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|_| {
            ReleaseError::config(format!("No remote named '{}' found", remote_name))
        })?;

        let mut push_options = git2::PushOptions::new();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let key_path = format!("{}/.ssh/{}", home, key);
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                Err(git2::Error::from_str(&format!(
                    "Push rejected for {}: {}",
                    refname, status
                )))
            } else {
                Ok(())
            }
        });

        push_options.remote_callbacks(callbacks);

        remote.push(
            &[&format!("refs/tags/{}", tag_name)],
            Some(&mut push_options),
        )?;

        Ok(())
    }
}
