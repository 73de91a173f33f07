//! Site driver.

use std::path::Path;
use std::sync::Arc;

use quill_config::{CliSettings, Config};
use quill_filter::{Filter, FilterParams};
use quill_plugin::{Capability, PluginRegistry};
use quill_router::{PathResolver, Rep, Router, SiteConfig};
use quill_vcs::VersionControl;

use crate::error::SiteError;

/// Web and disk path computed for one representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Path as it appears in links (index filename stripped).
    pub web: String,
    /// Path the representation is written to, including the output directory.
    pub disk: String,
}

/// One site build: settings, component selection and the component registry.
///
/// # Thread Safety
///
/// `Site` is `Send + Sync`. Register components before sharing it; after
/// that, [`router`](Self::router), [`vcs`](Self::vcs) and
/// [`filter`](Self::filter) may be called from any thread and return shared
/// instances.
#[derive(Debug)]
pub struct Site {
    config: Arc<SiteConfig>,
    router: String,
    vcs: Option<String>,
    plugins: PluginRegistry,
}

impl Site {
    /// Create a site that routes with the router registered as `router`.
    #[must_use]
    pub fn new(config: SiteConfig, router: impl Into<String>) -> Self {
        Self {
            config: Arc::new(config),
            router: router.into(),
            vcs: None,
            plugins: PluginRegistry::new(),
        }
    }

    /// Use the VCS adapter registered as `vcs`.
    #[must_use]
    pub fn with_vcs(mut self, vcs: impl Into<String>) -> Self {
        self.vcs = Some(vcs.into());
        self
    }

    /// Create a site from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let site = SiteConfig {
            output_dir: config.site.output_dir.clone(),
            index_filenames: config.site.index_filenames.clone(),
        };
        let mut result = Self::new(site, config.plugins.router.clone());
        result.vcs.clone_from(&config.plugins.vcs);
        result
    }

    /// Load `quill.toml` (see [`Config::load`]) and create a site from it.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if the configuration cannot be loaded.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, SiteError> {
        let config = Config::load(config_path, cli_settings)?;
        tracing::info!(
            config = ?config.config_path,
            output_dir = %config.site.output_dir,
            router = %config.plugins.router,
            vcs = ?config.plugins.vcs,
            "Loaded site configuration"
        );
        Ok(Self::from_config(&config))
    }

    /// Site settings shared with routers.
    #[must_use]
    pub fn config(&self) -> &Arc<SiteConfig> {
        &self.config
    }

    /// Component registry for this site.
    #[must_use]
    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    /// Identifier of the configured router.
    #[must_use]
    pub fn router_identifier(&self) -> &str {
        &self.router
    }

    /// Identifier of the configured VCS adapter, if any.
    #[must_use]
    pub fn vcs_identifier(&self) -> Option<&str> {
        self.vcs.as_deref()
    }

    /// Path resolver backed by the configured router.
    ///
    /// The router is built on first use and shared afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Plugin`] if no router is registered under the
    /// configured identifier.
    pub fn router(&self) -> Result<PathResolver, SiteError> {
        let router = self.resolve::<dyn Router>(&self.router, &self.config)?;
        Ok(PathResolver::new(router, Arc::clone(&self.config)))
    }

    /// The configured VCS adapter, or `None` if the site uses none.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Plugin`] if no adapter is registered under the
    /// configured identifier.
    pub fn vcs(&self) -> Result<Option<Arc<dyn VersionControl>>, SiteError> {
        let Some(identifier) = &self.vcs else {
            return Ok(None);
        };
        Ok(Some(self.resolve::<dyn VersionControl>(identifier, &())?))
    }

    /// The filter registered as `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Plugin`] if no filter is registered under `identifier`.
    pub fn filter(&self, identifier: &str) -> Result<Arc<dyn Filter>, SiteError> {
        self.resolve::<dyn Filter>(identifier, &())
    }

    /// Run the filter registered as `identifier` over `content`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Plugin`] if the filter is unknown and
    /// [`SiteError::Filter`] if it fails.
    pub fn apply_filter(
        &self,
        identifier: &str,
        content: &str,
        params: &FilterParams,
    ) -> Result<String, SiteError> {
        Ok(self.filter(identifier)?.run(content, params)?)
    }

    /// Compute web and disk paths for every representation, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first representation that cannot be routed.
    pub fn output_paths(&self, reps: &[Rep]) -> Result<Vec<OutputPaths>, SiteError> {
        let resolver = self.router()?;
        reps.iter()
            .map(|rep| {
                Ok(OutputPaths {
                    web: resolver.path_for(rep)?,
                    disk: resolver.raw_path_for(rep)?,
                })
            })
            .collect()
    }

    /// Add a newly created file to the working copy.
    ///
    /// Does nothing when the site has no VCS adapter.
    ///
    /// # Errors
    ///
    /// Returns the adapter's error unchanged (wrapped in [`SiteError::Vcs`]).
    pub fn record_add(&self, filename: &Path) -> Result<(), SiteError> {
        let Some(vcs) = self.vcs()? else {
            return Ok(());
        };
        tracing::debug!(file = %filename.display(), "VCS add");
        Ok(vcs.add(filename)?)
    }

    /// Remove a file from the working copy.
    ///
    /// Does nothing when the site has no VCS adapter.
    ///
    /// # Errors
    ///
    /// Returns the adapter's error unchanged (wrapped in [`SiteError::Vcs`]).
    pub fn record_remove(&self, filename: &Path) -> Result<(), SiteError> {
        let Some(vcs) = self.vcs()? else {
            return Ok(());
        };
        tracing::debug!(file = %filename.display(), "VCS remove");
        Ok(vcs.remove(filename)?)
    }

    /// Move a file within the working copy.
    ///
    /// Does nothing when the site has no VCS adapter.
    ///
    /// # Errors
    ///
    /// Returns the adapter's error unchanged (wrapped in [`SiteError::Vcs`]).
    pub fn record_move(&self, source: &Path, destination: &Path) -> Result<(), SiteError> {
        let Some(vcs) = self.vcs()? else {
            return Ok(());
        };
        tracing::debug!(
            from = %source.display(),
            to = %destination.display(),
            "VCS move"
        );
        Ok(vcs.move_file(source, destination)?)
    }

    fn resolve<C>(&self, identifier: &str, context: &C::Context) -> Result<Arc<C>, SiteError>
    where
        C: Capability + ?Sized,
    {
        self.plugins
            .named::<C>(identifier, context)
            .map_err(|err| {
                tracing::warn!(
                    kind = C::KIND,
                    identifier,
                    available = ?self.plugins.identifiers::<C>(),
                    "Unknown component"
                );
                err.into()
            })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use quill_filter::{BaseFilter, FilterError};
    use quill_plugin::{PluginError, constructor};
    use quill_router::{AttributeItem, BaseRouter, MockRouter, RouteError};
    use quill_vcs::{BaseVcs, RecordingVcs, VcsError, VcsOperation};

    use super::*;

    fn blog_router() -> MockRouter {
        MockRouter::new()
            .with_page("/", "/index.html")
            .with_page("/blog/hello/", "/blog/hello/index.html")
            .with_asset("/style/", "/style.css")
    }

    fn site_with_router() -> Site {
        let site = Site::new(SiteConfig::new("output"), "blog");
        site.plugins().register(
            constructor::<dyn Router>(|_site| Arc::new(blog_router())),
            &["blog"],
        );
        site
    }

    fn page(identifier: &str) -> Rep {
        Rep::page(Arc::new(AttributeItem::new(identifier)), "default")
    }

    fn asset(identifier: &str) -> Rep {
        Rep::asset(Arc::new(AttributeItem::new(identifier)), "default")
    }

    static_assertions::assert_impl_all!(Site: Send, Sync);

    #[test]
    fn test_output_paths_for_pages_and_assets() {
        let site = site_with_router();

        let paths = site
            .output_paths(&[page("/"), page("/blog/hello/"), asset("/style/")])
            .unwrap();

        assert_eq!(
            paths,
            vec![
                OutputPaths {
                    web: "/".to_owned(),
                    disk: "output/index.html".to_owned(),
                },
                OutputPaths {
                    web: "/blog/hello/".to_owned(),
                    disk: "output/blog/hello/index.html".to_owned(),
                },
                OutputPaths {
                    web: "/style.css".to_owned(),
                    disk: "output/style.css".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_output_paths_custom_path() {
        let site = site_with_router();
        let item = AttributeItem::new("/blog/hello/").with_custom_path("/hello.html");
        let rep = Rep::page(Arc::new(item), "default");

        let paths = site.output_paths(&[rep]).unwrap();

        assert_eq!(paths[0].web, "/hello.html");
        assert_eq!(paths[0].disk, "output/hello.html");
    }

    #[test]
    fn test_output_paths_stops_at_unroutable_rep() {
        let site = site_with_router();

        let err = site
            .output_paths(&[page("/"), page("/drafts/")])
            .unwrap_err();

        assert!(
            matches!(err, SiteError::Route(RouteError::Unroutable { ref identifier, .. }) if identifier == "/drafts/"),
            "{err:?}"
        );
    }

    #[test]
    fn test_router_is_built_once() {
        let site = site_with_router();

        let first = site.router().unwrap();
        let second = site.router().unwrap();

        assert!(Arc::ptr_eq(first.router(), second.router()));
    }

    #[test]
    fn test_router_receives_site_config() {
        let site = Site::new(SiteConfig::new("public"), "base");
        site.plugins().register(
            constructor::<dyn Router>(|site| {
                assert_eq!(site.output_dir, "public");
                Arc::new(BaseRouter::new(Arc::clone(site)))
            }),
            &["base"],
        );

        let resolver = site.router().unwrap();

        assert_eq!(resolver.site().output_dir, "public");
    }

    #[test]
    fn test_unknown_router_is_not_found() {
        let site = Site::new(SiteConfig::default(), "missing");

        let err = site.router().unwrap_err();

        assert!(matches!(
            err,
            SiteError::Plugin(PluginError::NotFound { kind: "router", ref identifier }) if identifier == "missing"
        ));
        assert_eq!(
            err.to_string(),
            "No router registered under identifier `missing`"
        );
    }

    #[test]
    fn test_base_router_fails_with_contract_error() {
        let site = Site::new(SiteConfig::default(), "base");
        site.plugins().register(
            constructor::<dyn Router>(|site| Arc::new(BaseRouter::new(Arc::clone(site)))),
            &["base"],
        );

        let err = site.output_paths(&[page("/")]).unwrap_err();

        assert!(
            matches!(&err, SiteError::Route(RouteError::NotImplemented(c)) if c.operation == "path_for_page_rep"),
            "{err:?}"
        );
    }

    #[test]
    fn test_reregistered_router_replaces_previous() {
        let site = site_with_router();
        assert_eq!(
            site.output_paths(&[asset("/style/")]).unwrap()[0].web,
            "/style.css"
        );

        site.plugins().register(
            constructor::<dyn Router>(|_site| {
                Arc::new(MockRouter::new().with_asset("/style/", "/assets/style.css"))
            }),
            &["blog"],
        );

        assert_eq!(
            site.output_paths(&[asset("/style/")]).unwrap()[0].web,
            "/assets/style.css"
        );
    }

    #[test]
    fn test_no_vcs_configured() {
        let site = site_with_router();

        assert!(site.vcs().unwrap().is_none());
        site.record_add(Path::new("content/a.md")).unwrap();
        site.record_remove(Path::new("content/a.md")).unwrap();
        site.record_move(Path::new("a.md"), Path::new("b.md")).unwrap();
    }

    #[test]
    fn test_vcs_operations_reach_adapter() {
        let vcs = Arc::new(RecordingVcs::new().with_file("content/old.md"));
        let shared = Arc::clone(&vcs);
        let site = site_with_router().with_vcs("recording");
        site.plugins().register(
            constructor::<dyn VersionControl>(move |()| Arc::clone(&shared) as Arc<dyn VersionControl>),
            &["recording"],
        );

        site.record_add(Path::new("content/new.md")).unwrap();
        site.record_move(Path::new("content/old.md"), Path::new("content/moved.md"))
            .unwrap();
        site.record_remove(Path::new("content/new.md")).unwrap();

        assert_eq!(vcs.files(), vec![PathBuf::from("content/moved.md")]);
        assert_eq!(
            vcs.operations(),
            vec![
                VcsOperation::Add(PathBuf::from("content/new.md")),
                VcsOperation::Move {
                    from: PathBuf::from("content/old.md"),
                    to: PathBuf::from("content/moved.md"),
                },
                VcsOperation::Remove(PathBuf::from("content/new.md")),
            ]
        );
    }

    #[test]
    fn test_vcs_backend_error_propagates_unchanged() {
        let site = site_with_router().with_vcs("recording");
        site.plugins().register(
            constructor::<dyn VersionControl>(|()| Arc::new(RecordingVcs::new())),
            &["recording"],
        );

        let err = site
            .record_move(Path::new("ghost.md"), Path::new("b.md"))
            .unwrap_err();

        match err {
            SiteError::Vcs(VcsError::Io { path, source }) => {
                assert_eq!(path, PathBuf::from("ghost.md"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected SiteError::Vcs(VcsError::Io), got {other:?}"),
        }
    }

    #[test]
    fn test_base_vcs_reports_missing_operation() {
        let site = site_with_router().with_vcs("base");
        site.plugins().register(
            constructor::<dyn VersionControl>(|()| Arc::new(BaseVcs)),
            &["base"],
        );

        let err = site.record_remove(Path::new("a.md")).unwrap_err();

        assert!(err.to_string().contains("BaseVcs does not override `remove`"));
    }

    #[test]
    fn test_unknown_vcs_is_not_found() {
        let site = site_with_router().with_vcs("svn");

        let err = site.record_add(Path::new("a.md")).unwrap_err();

        assert!(matches!(
            err,
            SiteError::Plugin(PluginError::NotFound { kind: "vcs", .. })
        ));
    }

    #[test]
    fn test_apply_filter() {
        struct Shout;

        impl Filter for Shout {
            fn run(&self, content: &str, _params: &FilterParams) -> Result<String, FilterError> {
                Ok(content.to_uppercase())
            }
        }

        let site = site_with_router();
        site.plugins()
            .register(constructor::<dyn Filter>(|()| Arc::new(Shout)), &["shout"]);

        let output = site
            .apply_filter("shout", "hello", &FilterParams::new())
            .unwrap();

        assert_eq!(output, "HELLO");
    }

    #[test]
    fn test_apply_base_filter_fails() {
        let site = site_with_router();
        site.plugins()
            .register(constructor::<dyn Filter>(|()| Arc::new(BaseFilter)), &["base"]);

        let err = site
            .apply_filter("base", "hello", &FilterParams::new())
            .unwrap_err();

        assert!(matches!(err, SiteError::Filter(FilterError::NotImplemented(_))));
    }

    #[test]
    fn test_identifiers_shared_across_kinds() {
        let site = site_with_router();
        site.plugins()
            .register(constructor::<dyn Filter>(|()| Arc::new(BaseFilter)), &["blog"]);

        assert!(site.router().is_ok());
        assert!(site.filter("blog").is_ok());
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(
            &path,
            "[site]\noutput_dir = \"/srv/www\"\nindex_filenames = [\"index.htm\", \"index.html\"]\n\n[plugins]\nrouter = \"blog\"\nvcs = \"git\"\n",
        )
        .unwrap();

        let site = Site::load(Some(&path), None).unwrap();

        assert_eq!(site.config().output_dir, "/srv/www");
        assert_eq!(
            site.config().index_filenames,
            vec!["index.htm".to_owned(), "index.html".to_owned()]
        );
        assert_eq!(site.router_identifier(), "blog");
        assert_eq!(site.vcs_identifier(), Some("git"));
    }

    #[test]
    fn test_load_with_cli_router_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "[plugins]\nrouter = \"blog\"\n").unwrap();
        let settings = CliSettings {
            router: Some("docs".to_owned()),
            ..Default::default()
        };

        let site = Site::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(site.router_identifier(), "docs");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();

        let err = Site::load(Some(&dir.path().join("nope.toml")), None).unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
    }
}
