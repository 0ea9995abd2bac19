//! Generated-file templates.
//!
//! Each artifact the scaffolder writes is a named constant with explicit
//! substitution points, so the generated-file contracts are testable in
//! isolation. Expansion is deterministic: no timestamps, no random data.

use crate::domain::Namespace;

/// File name of the phpspec suite configuration.
pub const PHPSPEC_FILE: &str = "phpspec.yml";

/// File name of the build/watch script.
pub const GULPFILE_FILE: &str = "Gulpfile.js";

/// File name of the npm package descriptor.
pub const PACKAGE_FILE: &str = "package.json";

/// Name of the source folder created inside the project.
pub const SOURCE_DIR: &str = "src";

/// The build/watch script. Fixed text, parameterized nowhere: a `test` task
/// (clear screen, run the suite, notify on pass/fail), a `watch` task that
/// re-runs `test` on source or spec changes, and a `default` task chaining
/// both.
pub const GULPFILE: &str = r#"var gulp = require('gulp');
var phpspec = require('gulp-phpspec');
var run = require('gulp-run');
var notify = require('gulp-notify');

gulp.task('test', function() {
    gulp.src('spec/**/*.php')
        .pipe(run('clear'))
        .pipe(phpspec('', { 'verbose': 'v', notify: true }))
        .on('error', notify.onError({
            title: "Crap",
            message: "Your tests FAILED!"
        }))
        .pipe(notify({
            title: "Success",
            message: "All tests have returned green!"
        }));
});

gulp.task('watch', function() {
    gulp.watch(['spec/**/*.php', 'src/**/*.php'], ['test']);
});

gulp.task('default', ['test', 'watch']);
"#;

/// Minimal npm package descriptor; npm fills in the dev-dependencies on
/// install.
pub const PACKAGE_STUB: &str = "{}\n";

/// Render the phpspec suite configuration for a namespace.
///
/// One suite, keyed by the lower-cased namespace, pointing phpspec at the
/// namespace and its PSR-4 prefix.
pub fn phpspec_config(namespace: &Namespace) -> String {
    format!(
        "suites:\n  {suite}:\n    namespace: {ns}\n    psr4_prefix: {ns}\n",
        suite = namespace.suite_key(),
        ns = namespace.as_str(),
    )
}
