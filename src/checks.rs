//! Builtin issue catalog
//!
//! Declares the issue descriptors shipped with the tool, one `static` per
//! issue, and assembles them into the ordered catalog consumed by
//! [`IssueRegistry`](crate::registry::IssueRegistry). Detection logic lives
//! in the analysis engine; this module only carries the metadata detectors
//! report against.
//!
//! Identifiers are stable and must never be reused for a different check,
//! since users persist them in suppression files and baselines.

use crate::issue::{Category, Issue, Scope, Severity};

/// Static upper bound on the catalog size
///
/// Sized ahead of the real count so additions don't silently cross it;
/// [`builtin_issues`] asserts the bound in debug builds and the catalog
/// tests check it exhaustively.
pub const INITIAL_CAPACITY: usize = 64;

// ============================================================================
// Manifest checks
// ============================================================================

pub static MANIFEST_ORDER: Issue = Issue::new(
    "ManifestOrder",
    "Checks the order of elements in the manifest",
    "The <application> tag should appear after the elements which declare \
     which version you need, which features you need, and so on. While this \
     is not strictly required, it is a common convention and some tools \
     assume it.",
    Category::Correctness,
    5,
    Severity::Warning,
    &[Scope::Manifest],
);

pub static USES_MIN_SDK: Issue = Issue::new(
    "UsesMinSdkAttributes",
    "Checks that the minimum SDK and target SDK attributes are defined",
    "The manifest should contain a <uses-sdk> element which defines the \
     minimum API level required for the application to run, as well as the \
     target version your application is designed for.",
    Category::Correctness,
    9,
    Severity::Warning,
    &[Scope::Manifest],
);

pub static MULTIPLE_USES_SDK: Issue = Issue::new(
    "MultipleUsesSdk",
    "Checks that the <uses-sdk> element appears at most once",
    "The <uses-sdk> element should appear just once; the tools will ignore \
     any duplicates, so later declarations are almost certainly a mistake.",
    Category::Correctness,
    6,
    Severity::Fatal,
    &[Scope::Manifest],
);

pub static MISSING_APPLICATION_ICON: Issue = Issue::new(
    "MissingApplicationIcon",
    "Checks that the application has an icon",
    "Applications should specify an icon in the manifest. Without one the \
     device falls back to a generic launcher icon, which makes the app hard \
     to find and looks unfinished.",
    Category::Icons,
    5,
    Severity::Warning,
    &[Scope::Manifest],
);

pub static ALLOW_BACKUP: Issue = Issue::new(
    "AllowBackup",
    "Checks that the allowBackup attribute is set explicitly",
    "The allowBackup attribute determines whether the application's data can \
     be backed up and restored via adb. Its default is true; apps handling \
     sensitive data should decide deliberately and set it explicitly.",
    Category::Security,
    3,
    Severity::Warning,
    &[Scope::Manifest],
);

pub static DUPLICATE_ACTIVITY: Issue = Issue::new(
    "DuplicateActivity",
    "Checks that an activity is registered only once in the manifest",
    "An activity should only be registered once in the manifest. A duplicate \
     registration is ignored at runtime and usually indicates a bad merge.",
    Category::Correctness,
    5,
    Severity::Error,
    &[Scope::Manifest],
);

// ============================================================================
// Security checks
// ============================================================================

pub static EXPORTED_SERVICE: Issue = Issue::new(
    "ExportedService",
    "Checks for exported services that do not require permissions",
    "Exported services are accessible to any application on the device. A \
     service that performs privileged work should either not be exported or \
     should declare a permission that clients must hold.",
    Category::Security,
    5,
    Severity::Warning,
    &[Scope::Manifest],
);

pub static EXPORTED_RECEIVER: Issue = Issue::new(
    "ExportedReceiver",
    "Checks for exported broadcast receivers that do not require permissions",
    "Exported receivers can be invoked by any application. Receivers that \
     act on the broadcast payload should declare a permission, or not be \
     exported at all.",
    Category::Security,
    5,
    Severity::Warning,
    &[Scope::Manifest],
);

pub static GRANT_ALL_URIS: Issue = Issue::new(
    "GrantAllUris",
    "Checks for <grant-uri-permission> elements where everything is shared",
    "The <grant-uri-permission> element allows specific paths to be shared. \
     Using a path of '/' shares every URI of the content provider, which is \
     almost never intended.",
    Category::Security,
    7,
    Severity::Warning,
    &[Scope::Manifest],
);

pub static WORLD_READABLE_FILES: Issue = Issue::new(
    "WorldReadableFiles",
    "Checks for openFileOutput calls passing MODE_WORLD_READABLE",
    "Files created with MODE_WORLD_READABLE can be read by any application \
     on the device. This mode is deprecated; use a content provider with \
     explicit URI grants to share data instead.",
    Category::Security,
    4,
    Severity::Warning,
    &[Scope::JavaSource],
);

pub static SET_JAVASCRIPT_ENABLED: Issue = Issue::new(
    "SetJavaScriptEnabled",
    "Checks for WebView calls enabling JavaScript",
    "Enabling JavaScript in a WebView exposes the application to cross-site \
     scripting if it ever loads untrusted content. Only enable it when the \
     WebView genuinely needs it.",
    Category::Security,
    6,
    Severity::Warning,
    &[Scope::JavaSource],
);

pub static HARDCODED_DEBUG_MODE: Issue = Issue::new(
    "HardcodedDebugMode",
    "Checks for hardcoded android:debuggable in the manifest",
    "The android:debuggable attribute should not be hardcoded: build tools \
     set it automatically for debug builds and clear it for release builds. \
     Shipping a debuggable release build lets anyone attach a debugger.",
    Category::Security,
    5,
    Severity::Fatal,
    &[Scope::Manifest],
);

// ============================================================================
// API and bytecode correctness checks
// ============================================================================

pub static NEW_API: Issue = Issue::new(
    "NewApi",
    "Finds API accesses to APIs that are not supported in all targeted versions",
    "The code uses an API that is newer than the minSdkVersion declared in \
     the manifest. On older devices the call site throws at class load or \
     invocation time. Guard the call with an SDK_INT check or raise the \
     minimum SDK.",
    Category::Correctness,
    6,
    Severity::Error,
    &[Scope::JavaSource, Scope::Resources, Scope::Manifest],
);

pub static INLINED_API: Issue = Issue::new(
    "InlinedApi",
    "Finds usages of constant fields inlined from newer APIs",
    "The value of a static final field from a newer API is copied into the \
     compiled class, so the code runs on older devices but may behave \
     differently than intended there. Verify the fallback behavior.",
    Category::Correctness,
    6,
    Severity::Warning,
    &[Scope::JavaSource],
);

pub static OVERRIDE_API: Issue = Issue::new(
    "Override",
    "Finds method declarations that will accidentally override methods in later versions",
    "A method with the same signature as a framework method introduced in a \
     newer API level silently becomes an override on newer devices, changing \
     behavior depending on the OS version. Rename the method.",
    Category::Correctness,
    6,
    Severity::Error,
    &[Scope::ClassFile],
);

pub static INVALID_PACKAGE: Issue = Issue::new(
    "InvalidPackage",
    "Finds library dependencies on packages that are not available on Android",
    "A bundled library references packages such as java.awt or javax.swing \
     which do not exist on Android; the affected code paths will throw at \
     runtime if ever reached.",
    Category::Correctness,
    6,
    Severity::Error,
    &[Scope::JavaLibraries],
);

pub static MISSING_SUPER_CALL: Issue = Issue::new(
    "MissingSuperCall",
    "Checks that overriding methods call super when required",
    "Some framework methods require that overrides invoke the super \
     implementation; skipping it leaves the component in an inconsistent \
     state that typically crashes later in the lifecycle.",
    Category::Correctness,
    9,
    Severity::Error,
    &[Scope::JavaSource],
);

pub static MISSING_REGISTERED: Issue = Issue::new(
    "MissingRegistered",
    "Checks that classes referenced in the manifest exist in the project",
    "The manifest names an activity, service, or provider class that cannot \
     be found in the project or its libraries. Launching that component \
     crashes with a ClassNotFoundException.",
    Category::Correctness,
    8,
    Severity::Error,
    &[Scope::Manifest, Scope::ClassFile],
);

pub static REGISTERED: Issue = Issue::new(
    "Registered",
    "Checks that Activities, Services and Content Providers are registered in the manifest",
    "An Activity, Service or ContentProvider subclass that is not registered \
     in the manifest cannot be launched. This is fine for base classes that \
     are never instantiated directly, but concrete components must appear in \
     the manifest.",
    Category::Correctness,
    6,
    Severity::Warning,
    &[Scope::Manifest, Scope::ClassFile],
)
.disabled_by_default();

pub static HANDLER_LEAK: Issue = Issue::new(
    "HandlerLeak",
    "Ensures that Handler classes do not hold on to a reference to an outer class",
    "A non-static inner Handler keeps an implicit reference to its outer \
     class. If the Handler has pending messages when the Activity is \
     destroyed, the whole Activity leaks. Declare the Handler static and \
     hold the outer class through a WeakReference.",
    Category::Performance,
    4,
    Severity::Warning,
    &[Scope::JavaSource],
);

pub static VALID_FRAGMENT: Issue = Issue::new(
    "ValidFragment",
    "Ensures that Fragment subclasses can be instantiated by the framework",
    "Fragments are re-instantiated by the framework on configuration \
     changes, which requires a public no-argument constructor. Anonymous or \
     non-static inner fragment classes cannot be restored and crash.",
    Category::Correctness,
    6,
    Severity::Error,
    &[Scope::JavaSource],
);

pub static SIMPLE_DATE_FORMAT: Issue = Issue::new(
    "SimpleDateFormat",
    "Checks for SimpleDateFormat usages without an explicit locale",
    "SimpleDateFormat without a locale uses the device default, so dates \
     intended for machine parsing change format with the user's language. \
     Pass an explicit locale for any non-display formatting.",
    Category::Correctness,
    6,
    Severity::Warning,
    &[Scope::JavaSource],
);

pub static DEFAULT_LOCALE: Issue = Issue::new(
    "DefaultLocale",
    "Finds implicit default locale usages in case conversions and formatting",
    "String.toUpperCase and toLowerCase without a locale use the device \
     default, which breaks identifier comparisons in locales such as \
     Turkish where 'i' does not capitalize to 'I'. Pass Locale.ROOT for \
     machine-readable strings.",
    Category::Correctness,
    6,
    Severity::Warning,
    &[Scope::JavaSource],
);

pub static SDCARD_PATH: Issue = Issue::new(
    "SdCardPath",
    "Looks for hardcoded references to /sdcard",
    "Hardcoded external-storage paths do not work on all devices; the mount \
     point varies. Use Environment.getExternalStorageDirectory or the \
     Context storage APIs instead.",
    Category::Correctness,
    6,
    Severity::Warning,
    &[Scope::JavaSource],
);

pub static WRONG_CALL: Issue = Issue::new(
    "WrongCall",
    "Finds cases where the wrong draw/layout/measure method is called",
    "Custom views should invoke the framework entry points (invalidate, \
     requestLayout, measure) rather than calling onDraw, onLayout or \
     onMeasure directly; the on* callbacks skip the framework bookkeeping \
     those entry points perform.",
    Category::Correctness,
    6,
    Severity::Error,
    &[Scope::JavaSource],
);

pub static STOP_SHIP: Issue = Issue::new(
    "StopShip",
    "Looks for STOPSHIP comments which should not be shipped",
    "A STOPSHIP comment marks code that must be addressed before release. \
     This check flags any that remain so release builds fail fast instead \
     of shipping the marked code.",
    Category::Correctness,
    2,
    Severity::Warning,
    &[Scope::JavaSource],
)
.disabled_by_default();

// ============================================================================
// Layout and resource checks
// ============================================================================

pub static DUPLICATE_IDS: Issue = Issue::new(
    "DuplicateIds",
    "Checks for duplicate ids within a single layout",
    "Within a layout, id attributes should be unique; findViewById returns \
     only the first match, so the duplicate view is unreachable by id.",
    Category::Correctness,
    5,
    Severity::Warning,
    &[Scope::Resources],
);

pub static UNKNOWN_ID: Issue = Issue::new(
    "UnknownId",
    "Checks for id references to ids that are not defined anywhere",
    "A layout attribute references an @id that is not defined in any \
     resource file. Inflating the layout fails, or RelativeLayout \
     constraints silently anchor to nothing.",
    Category::Correctness,
    5,
    Severity::Error,
    &[Scope::Resources],
);

pub static INEFFICIENT_WEIGHT: Issue = Issue::new(
    "InefficientWeight",
    "Looks for inefficient weight declarations in LinearLayouts",
    "When a single child carries all the weight, measuring is faster if the \
     child's dimension along the layout axis is 0dp rather than wrap_content, \
     since the value is discarded anyway.",
    Category::Performance,
    3,
    Severity::Warning,
    &[Scope::Resources],
);

pub static NESTED_WEIGHTS: Issue = Issue::new(
    "NestedWeights",
    "Looks for nested layout weights, which are costly",
    "Layout weights require a widget to be measured twice. Nesting weighted \
     LinearLayouts makes the cost exponential in the nesting depth; flatten \
     the hierarchy or switch to a different layout.",
    Category::Performance,
    3,
    Severity::Warning,
    &[Scope::Resources],
);

pub static BASELINE_WEIGHTS: Issue = Issue::new(
    "DisableBaselineAlignment",
    "Checks whether horizontal LinearLayouts with weights set baselineAligned to false",
    "A horizontal LinearLayout that uses weights for spacing rather than \
     text alignment should set android:baselineAligned=\"false\" to skip an \
     unnecessary alignment pass.",
    Category::Performance,
    3,
    Severity::Warning,
    &[Scope::Resources],
);

pub static SCROLLVIEW_SIZE: Issue = Issue::new(
    "ScrollViewSize",
    "Checks that ScrollView children set the right dimension along the scrolling axis",
    "ScrollView children should use wrap_content along the scrolling \
     dimension; match_parent there is contradictory, since the child is \
     supposed to define the scrolled extent.",
    Category::Correctness,
    7,
    Severity::Warning,
    &[Scope::Resources],
);

pub static MERGE_ROOT_FRAME: Issue = Issue::new(
    "MergeRootFrame",
    "Checks whether a root FrameLayout can be replaced with a <merge> tag",
    "A FrameLayout that is the root of a layout added into another \
     FrameLayout (such as the activity content view) is redundant and can \
     be replaced with <merge>, removing one level from the view hierarchy.",
    Category::Performance,
    4,
    Severity::Warning,
    &[Scope::Resources],
);

pub static USE_COMPOUND_DRAWABLES: Issue = Issue::new(
    "UseCompoundDrawables",
    "Checks whether the current node can be replaced by a TextView using compound drawables",
    "A LinearLayout containing exactly an ImageView and a TextView renders \
     identically, and measures faster, as a single TextView with a compound \
     drawable.",
    Category::Performance,
    6,
    Severity::Warning,
    &[Scope::Resources],
);

pub static USELESS_PARENT: Issue = Issue::new(
    "UselessParent",
    "Checks whether a parent layout can be removed",
    "A layout with children but no background, padding, or sibling-relative \
     behavior of its own contributes nothing and can be removed, moving its \
     children into the parent.",
    Category::Performance,
    2,
    Severity::Warning,
    &[Scope::Resources],
);

pub static USELESS_LEAF: Issue = Issue::new(
    "UselessLeaf",
    "Checks whether a leaf layout can be removed",
    "A layout with no children, no background and no id serves no purpose \
     in the view hierarchy and can be deleted.",
    Category::Performance,
    2,
    Severity::Warning,
    &[Scope::Resources],
);

pub static TOO_MANY_VIEWS: Issue = Issue::new(
    "TooManyViews",
    "Checks whether a layout has too many views",
    "Layouts with very many views are slow to inflate and measure. Consider \
     collapsing decorative views or loading rarely-shown subtrees lazily \
     with a ViewStub.",
    Category::Performance,
    1,
    Severity::Warning,
    &[Scope::Resources],
);

pub static TOO_DEEP_LAYOUT: Issue = Issue::new(
    "TooDeepLayout",
    "Checks whether a layout hierarchy is too deep",
    "Deep view hierarchies multiply measure and layout passes. Flatten the \
     tree, for example by replacing nested LinearLayouts with a \
     RelativeLayout.",
    Category::Performance,
    1,
    Severity::Warning,
    &[Scope::Resources],
);

pub static DEPRECATED_RESOURCE: Issue = Issue::new(
    "Deprecated",
    "Looks for usages of deprecated layouts, attributes, and other resources",
    "Deprecated widgets and attributes still work but have documented \
     replacements that behave better on current platform versions; migrate \
     to the replacement named in the deprecation notice.",
    Category::Correctness,
    2,
    Severity::Warning,
    &[Scope::Resources, Scope::Manifest],
);

pub static OBSOLETE_LAYOUT_PARAM: Issue = Issue::new(
    "ObsoleteLayoutParam",
    "Looks for layout params that are not valid for the given parent layout",
    "A layout_* attribute that the parent layout does not understand is \
     silently ignored at inflation time, wasting space in the APK and \
     misleading readers of the layout file.",
    Category::Performance,
    6,
    Severity::Warning,
    &[Scope::Resources],
);

pub static STATE_LIST_REACHABLE: Issue = Issue::new(
    "StateListReachable",
    "Looks for unreachable states in a state list drawable",
    "States in a state list drawable are matched top to bottom. An item \
     without constraints that appears before constrained items makes those \
     later items unreachable.",
    Category::Correctness,
    5,
    Severity::Warning,
    &[Scope::Resources],
);

pub static UNUSED_RESOURCES: Issue = Issue::new(
    "UnusedResources",
    "Looks for unused resources",
    "Unused resources grow the APK and slow down builds. Note that resources \
     referenced only through dynamically constructed names cannot be traced \
     by static analysis and may be flagged incorrectly.",
    Category::Performance,
    3,
    Severity::Warning,
    &[Scope::Manifest, Scope::JavaSource, Scope::Resources],
);

pub static UNUSED_IDS: Issue = Issue::new(
    "UnusedIds",
    "Looks for unused id resources",
    "An id that is never referenced from code or other resources can be \
     removed. Disabled by default since ids are cheap and often kept for \
     UI tests.",
    Category::Performance,
    1,
    Severity::Warning,
    &[Scope::JavaSource, Scope::Resources],
)
.disabled_by_default();

pub static OVERDRAW: Issue = Issue::new(
    "Overdraw",
    "Looks for overdraw issues where a background is painted over by the theme background",
    "A root view background drawn on top of the theme's window background \
     paints every pixel twice. Either remove the view background or set the \
     window background to null in the theme.",
    Category::Performance,
    3,
    Severity::Warning,
    &[Scope::Manifest, Scope::JavaSource, Scope::Resources],
);

// ============================================================================
// Internationalization, accessibility and usability checks
// ============================================================================

pub static HARDCODED_TEXT: Issue = Issue::new(
    "HardcodedText",
    "Looks for hardcoded text attributes which should be converted to resource lookup",
    "Hardcoding text in layout files prevents translation and makes later \
     edits error-prone since the string may be duplicated across layouts. \
     Extract the text into a @string resource.",
    Category::Internationalization,
    5,
    Severity::Warning,
    &[Scope::Resources],
);

pub static MISSING_TRANSLATION: Issue = Issue::new(
    "MissingTranslation",
    "Checks for incomplete translations where not all strings are translated",
    "If a string is translated for some locales but missing in others, users \
     of the missing locales see a mix of languages or a crash for strings \
     resolved at runtime. Either translate the string everywhere or mark it \
     translatable=\"false\".",
    Category::Internationalization,
    8,
    Severity::Fatal,
    &[Scope::Resources],
);

pub static EXTRA_TRANSLATION: Issue = Issue::new(
    "ExtraTranslation",
    "Checks for translations that appear to be unused (no default language string)",
    "A translated string with no default-locale counterpart is either dead \
     or the default definition was deleted by mistake; in the latter case \
     devices using the default locale crash on lookup.",
    Category::Internationalization,
    6,
    Severity::Fatal,
    &[Scope::Resources],
);

pub static CONTENT_DESCRIPTION: Issue = Issue::new(
    "ContentDescription",
    "Ensures that image widgets provide a contentDescription",
    "Screen readers describe images through the contentDescription \
     attribute. Images that convey information must set it; purely \
     decorative images should set it to @null so they are skipped.",
    Category::Accessibility,
    3,
    Severity::Warning,
    &[Scope::Resources],
);

pub static LABEL_FOR: Issue = Issue::new(
    "LabelFor",
    "Ensures that text fields are tied to a label with the labelFor attribute",
    "Editable text fields should be associated with a label via labelFor so \
     screen readers can announce what the field is for.",
    Category::Accessibility,
    2,
    Severity::Warning,
    &[Scope::Resources],
);

pub static PX_USAGE: Issue = Issue::new(
    "PxUsage",
    "Looks for use of the px dimension unit instead of dp",
    "Pixel dimensions render at different physical sizes depending on the \
     screen density. Use density-independent dp units, or sp for text.",
    Category::Usability,
    2,
    Severity::Warning,
    &[Scope::Resources],
);

pub static SMALL_SP: Issue = Issue::new(
    "SmallSp",
    "Looks for text sizes that are too small",
    "Text smaller than 12sp is hard to read on most devices. If the design \
     calls for a smaller size, confirm the text is decorative rather than \
     content.",
    Category::Usability,
    4,
    Severity::Warning,
    &[Scope::Resources],
);

pub static TEXT_FIELDS: Issue = Issue::new(
    "TextFields",
    "Looks for text fields missing an inputType attribute",
    "Specifying inputType gives the user the right keyboard layout and \
     enables appropriate autocorrect behavior. A text field without it gets \
     the generic keyboard for every input kind.",
    Category::Usability,
    5,
    Severity::Warning,
    &[Scope::Resources],
);

pub static TYPOGRAPHY_DASHES: Issue = Issue::new(
    "TypographyDashes",
    "Looks for usages of hyphens which can be replaced by n or m dashes",
    "Number ranges and parenthetical breaks read better with the proper \
     en dash (\u{2013}) and em dash (\u{2014}) characters than with ASCII \
     hyphens.",
    Category::Typography,
    5,
    Severity::Warning,
    &[Scope::Resources],
);

pub static TYPOGRAPHY_ELLIPSIS: Issue = Issue::new(
    "TypographyEllipsis",
    "Looks for ellipsis strings which can be replaced with an ellipsis character",
    "Three periods can be replaced by the single ellipsis character \
     (\u{2026}), which renders with correct spacing in every font.",
    Category::Typography,
    5,
    Severity::Warning,
    &[Scope::Resources],
);

pub static TYPOGRAPHY_QUOTES: Issue = Issue::new(
    "TypographyQuotes",
    "Looks for straight quotes which can be replaced by curvy quotes",
    "Straight apostrophes and quotation marks can be replaced by their \
     directional counterparts for better-looking text. Disabled by default \
     since some products standardize on straight quotes.",
    Category::Typography,
    5,
    Severity::Warning,
    &[Scope::Resources],
)
.disabled_by_default();

pub static TYPOS: Issue = Issue::new(
    "Typos",
    "Looks for typos in messages",
    "The default-locale string resources are checked against a dictionary \
     of common spelling mistakes. Fix the typo or, for intentional \
     spellings such as brand names, suppress the finding.",
    Category::Correctness,
    7,
    Severity::Warning,
    &[Scope::Resources],
);

// ============================================================================
// Build file checks
// ============================================================================

pub static GRADLE_DEPENDENCY: Issue = Issue::new(
    "GradleDependency",
    "Looks for outdated library dependencies in Gradle files",
    "A newer stable version of a declared dependency is available. Newer \
     versions carry bug fixes; staying far behind makes eventual upgrades \
     riskier.",
    Category::Correctness,
    4,
    Severity::Warning,
    &[Scope::Gradle],
);

pub static GRADLE_OVERRIDES: Issue = Issue::new(
    "GradleOverrides",
    "Looks for manifest values that are overridden by Gradle build scripts",
    "Values such as minSdkVersion declared in the manifest are replaced by \
     the Gradle configuration during the build, so the manifest value is \
     misleading. Remove it from the manifest or keep the two in sync.",
    Category::Correctness,
    8,
    Severity::Warning,
    &[Scope::Manifest, Scope::Gradle],
);

pub static PROGUARD_WRONG_KEEP: Issue = Issue::new(
    "Proguard",
    "Looks for problems in ProGuard configuration files",
    "The configuration uses -keepclasseswithmembernames on classes that \
     need -keepclasseswithmembers; with the wrong flag, obfuscation renames \
     members the platform looks up reflectively and the app crashes.",
    Category::Correctness,
    8,
    Severity::Fatal,
    &[Scope::ProguardFile],
);

pub static PROGUARD_SPLIT_CONFIG: Issue = Issue::new(
    "ProguardSplit",
    "Checks for old ProGuard configurations that should be migrated",
    "The project uses the legacy single proguard.cfg layout. Migrate to the \
     split configuration so tool upgrades can evolve the default rules \
     without touching the project-specific ones.",
    Category::Correctness,
    8,
    Severity::Warning,
    &[Scope::ProguardFile],
);

// ============================================================================
// Catalog
// ============================================================================

/// The ordered builtin catalog
///
/// Order matters only for reproducible listings, not for lookup.
pub static BUILTIN_ISSUES: &[&Issue] = &[
    // Manifest
    &MANIFEST_ORDER,
    &USES_MIN_SDK,
    &MULTIPLE_USES_SDK,
    &MISSING_APPLICATION_ICON,
    &ALLOW_BACKUP,
    &DUPLICATE_ACTIVITY,
    // Security
    &EXPORTED_SERVICE,
    &EXPORTED_RECEIVER,
    &GRANT_ALL_URIS,
    &WORLD_READABLE_FILES,
    &SET_JAVASCRIPT_ENABLED,
    &HARDCODED_DEBUG_MODE,
    // API and bytecode
    &NEW_API,
    &INLINED_API,
    &OVERRIDE_API,
    &INVALID_PACKAGE,
    &MISSING_SUPER_CALL,
    &MISSING_REGISTERED,
    &REGISTERED,
    &HANDLER_LEAK,
    &VALID_FRAGMENT,
    &SIMPLE_DATE_FORMAT,
    &DEFAULT_LOCALE,
    &SDCARD_PATH,
    &WRONG_CALL,
    &STOP_SHIP,
    // Layouts and resources
    &DUPLICATE_IDS,
    &UNKNOWN_ID,
    &INEFFICIENT_WEIGHT,
    &NESTED_WEIGHTS,
    &BASELINE_WEIGHTS,
    &SCROLLVIEW_SIZE,
    &MERGE_ROOT_FRAME,
    &USE_COMPOUND_DRAWABLES,
    &USELESS_PARENT,
    &USELESS_LEAF,
    &TOO_MANY_VIEWS,
    &TOO_DEEP_LAYOUT,
    &DEPRECATED_RESOURCE,
    &OBSOLETE_LAYOUT_PARAM,
    &STATE_LIST_REACHABLE,
    &UNUSED_RESOURCES,
    &UNUSED_IDS,
    &OVERDRAW,
    // I18n, accessibility, usability
    &HARDCODED_TEXT,
    &MISSING_TRANSLATION,
    &EXTRA_TRANSLATION,
    &CONTENT_DESCRIPTION,
    &LABEL_FOR,
    &PX_USAGE,
    &SMALL_SP,
    &TEXT_FIELDS,
    &TYPOGRAPHY_DASHES,
    &TYPOGRAPHY_ELLIPSIS,
    &TYPOGRAPHY_QUOTES,
    &TYPOS,
    // Build files
    &GRADLE_DEPENDENCY,
    &GRADLE_OVERRIDES,
    &PROGUARD_WRONG_KEEP,
    &PROGUARD_SPLIT_CONFIG,
];

/// Returns the builtin issue catalog in declaration order
pub fn builtin_issues() -> &'static [&'static Issue] {
    debug_assert!(
        BUILTIN_ISSUES.len() <= INITIAL_CAPACITY,
        "catalog outgrew INITIAL_CAPACITY: {}",
        BUILTIN_ISSUES.len()
    );
    BUILTIN_ISSUES
}
