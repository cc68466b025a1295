// ABOUTME: Fixed tag catalog split into general and explicit pools
// ABOUTME: Handles uniform random tag selection and NSFW promotion for explicit tags

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTag {
    pub name: &'static str,
    pub description: &'static str,
}

/// The two tag pools understood by the image source.
///
/// Both pools are fixed for the process lifetime. Build one with
/// [`TagCatalog::builtin`] at startup and pass it by reference.
pub struct TagCatalog {
    general: Vec<CatalogTag>,
    explicit: Vec<CatalogTag>,
}

impl TagCatalog {
    pub fn builtin() -> Self {
        Self {
            general: vec![
                CatalogTag {
                    name: "waifu",
                    description: "A female anime or manga character",
                },
                CatalogTag {
                    name: "maid",
                    description: "Characters in maid outfits",
                },
                CatalogTag {
                    name: "uniform",
                    description: "Characters in school or work uniforms",
                },
                CatalogTag {
                    name: "selfies",
                    description: "Characters taking selfies",
                },
                CatalogTag {
                    name: "marin-kitagawa",
                    description: "Marin Kitagawa from My Dress-Up Darling",
                },
                CatalogTag {
                    name: "mori-calliope",
                    description: "Mori Calliope from Hololive",
                },
                CatalogTag {
                    name: "raiden-shogun",
                    description: "Raiden Shogun from Genshin Impact",
                },
                CatalogTag {
                    name: "kamisato-ayaka",
                    description: "Kamisato Ayaka from Genshin Impact",
                },
            ],
            explicit: vec![
                CatalogTag {
                    name: "ero",
                    description: "Adult content (18+)",
                },
                CatalogTag {
                    name: "ecchi",
                    description: "Suggestive adult content (18+)",
                },
                CatalogTag {
                    name: "hentai",
                    description: "Explicit adult content (18+)",
                },
            ],
        }
    }

    pub fn general(&self) -> &[CatalogTag] {
        &self.general
    }

    pub fn explicit(&self) -> &[CatalogTag] {
        &self.explicit
    }

    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.iter().any(|tag| tag.name == name)
    }

    /// Whether any of the requested tags belongs to the explicit pool.
    ///
    /// When this is true the effective NSFW flag must be forced on, no matter
    /// what was asked for originally.
    pub fn forces_nsfw(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.is_explicit(tag))
    }

    /// Pick one tag uniformly at random from the applicable pool.
    ///
    /// The explicit pool only participates when `nsfw` is enabled.
    pub fn pick_random(&self, nsfw: bool) -> &CatalogTag {
        self.pick_random_with(nsfw, &mut rand::thread_rng())
    }

    pub fn pick_random_with<R: Rng + ?Sized>(&self, nsfw: bool, rng: &mut R) -> &CatalogTag {
        let pool: Vec<&CatalogTag> = if nsfw {
            self.general.iter().chain(self.explicit.iter()).collect()
        } else {
            self.general.iter().collect()
        };
        // Both pools are non-empty by construction
        pool[rng.gen_range(0..pool.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pools_are_disjoint_and_non_empty() {
        let catalog = TagCatalog::builtin();
        assert!(!catalog.general().is_empty());
        assert!(!catalog.explicit().is_empty());

        let general: HashSet<&str> = catalog.general().iter().map(|t| t.name).collect();
        for tag in catalog.explicit() {
            assert!(!general.contains(tag.name), "{} is in both pools", tag.name);
        }
    }

    #[test]
    fn test_is_explicit() {
        let catalog = TagCatalog::builtin();
        assert!(catalog.is_explicit("hentai"));
        assert!(!catalog.is_explicit("waifu"));
        assert!(!catalog.is_explicit("not-a-tag"));
    }

    #[test]
    fn test_forces_nsfw_with_explicit_tag() {
        let catalog = TagCatalog::builtin();
        assert!(catalog.forces_nsfw(&["waifu".to_string(), "ero".to_string()]));
        assert!(!catalog.forces_nsfw(&["waifu".to_string(), "maid".to_string()]));
        assert!(!catalog.forces_nsfw(&[]));
    }

    #[test]
    fn test_pick_random_sfw_never_draws_explicit() {
        let catalog = TagCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let tag = catalog.pick_random_with(false, &mut rng);
            assert!(!catalog.is_explicit(tag.name));
        }
    }

    #[test]
    fn test_pick_random_nsfw_covers_both_pools() {
        let catalog = TagCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_explicit = false;
        let mut saw_general = false;
        for _ in 0..500 {
            let tag = catalog.pick_random_with(true, &mut rng);
            if catalog.is_explicit(tag.name) {
                saw_explicit = true;
            } else {
                saw_general = true;
            }
        }
        assert!(saw_explicit && saw_general);
    }
}
