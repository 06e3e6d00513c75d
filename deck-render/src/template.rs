//! Page assembly: head/style preamble, per-slide wrappers, footer.
//!
//! The lead slide (slide 1) renders full-height with title-page styling;
//! every other slide is a card with a page-info strip. Slides are joined
//! with a divider. All styling is embedded so the output is a single
//! self-contained file.

use crate::slides::Slide;
use crate::util::escape_html;

/// Text the templating layer needs from outside: the document title and the
/// fixed footer lines.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub footer_title: String,
    pub footer_subtitle: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Slide Deck".to_string(),
            footer_title: "Slide Deck".to_string(),
            footer_subtitle: "Generated from Markdown".to_string(),
        }
    }
}

/// Wrap one rendered slide fragment in its container.
pub(crate) fn slide_section(slide: &Slide, fragment: &str, total: usize) -> String {
    if slide.is_lead {
        format!(
            "<div class=\"lead-slide\" id=\"slide-{n}\">\n{fragment}\n\
             <p class=\"lead-hint\">Scroll to continue &darr;</p>\n</div>\n",
            n = slide.number,
        )
    } else {
        format!(
            "<div class=\"slide-card\" id=\"slide-{n}\">\n{fragment}\n\
             <div class=\"page-info\">\
             <div class=\"page-number\">{n} / {total}</div>\
             <div class=\"page-label\">Slide {n}</div>\
             </div>\n</div>\n",
            n = slide.number,
        )
    }
}

pub(crate) const DIVIDER: &str = "<div class=\"divider\"></div>\n";

/// Assemble the complete HTML document around the rendered slide blocks.
pub(crate) fn page(body: &str, options: &PageOptions) -> String {
    format!(
        "{head}{body}{footer}",
        head = head(&options.title),
        body = body,
        footer = footer(&options.footer_title, &options.footer_subtitle),
    )
}

fn head(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
<div class="progress-bar" id="progressBar"></div>
<div class="nav-container">
<button onclick="scrollToTop()" class="nav-button">&uarr; Top</button>
<button onclick="scrollToBottom()" class="nav-button">&darr; End</button>
</div>
<div class="scroll-spy" id="scrollSpy"><div id="scrollSpyList"></div></div>
<div class="main-container">
<div class="content-wrapper">
"#,
        title = escape_html(title),
        css = STYLESHEET,
    )
}

fn footer(title: &str, subtitle: &str) -> String {
    format!(
        r#"<footer class="footer">
<div class="footer-title">{title}</div>
<div class="footer-subtitle">{subtitle}</div>
</footer>
</div>
</div>
<script>
{js}
</script>
</body>
</html>
"#,
        title = escape_html(title),
        subtitle = escape_html(subtitle),
        js = SCRIPT,
    )
}

const STYLESHEET: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Inter', system-ui, sans-serif;
    line-height: 1.6;
    color: #1d1d1f;
    background: linear-gradient(135deg, #f8f9fa 0%, #e9ecef 100%);
    overflow-x: hidden;
}
.main-container {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    margin-left: 192px;
}
.content-wrapper { max-width: 1024px; width: 100%; padding: 32px; }
.nav-container {
    position: fixed; top: 24px; right: 24px; z-index: 40;
    background: rgba(255, 255, 255, 0.9);
    padding: 12px;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
}
.nav-button {
    background: linear-gradient(135deg, #495057 0%, #6c757d 100%);
    color: #fff; border: none; padding: 12px 20px;
    font-size: 14px; cursor: pointer;
    display: block; width: 100%; margin: 4px 0;
}
.progress-bar {
    position: fixed; top: 0; left: 0; height: 3px;
    background: linear-gradient(90deg, #495057 0%, #6c757d 100%);
    z-index: 50; transition: width 0.3s;
}
.scroll-spy {
    position: fixed; left: 0; top: 0; bottom: 0; width: 192px; z-index: 40;
    display: flex; align-items: center; padding: 0 16px;
}
.scroll-spy-item {
    padding: 4px 8px; cursor: pointer; font-size: 10px; line-height: 1.3;
    border-left: 2px solid transparent; color: #666;
}
.scroll-spy-item.active { background: #f0f0f0; border-left-color: #000; color: #000; }
.scroll-spy-number { display: inline-block; width: 24px; color: #999; font-size: 10px; }
.lead-slide {
    background: linear-gradient(135deg, #2c2c2e 0%, #1c1c1e 100%);
    color: #fff; text-align: center; padding: 150px 32px; margin-bottom: 48px;
    min-height: 100vh; display: flex; flex-direction: column;
    justify-content: center; align-items: center;
}
.lead-slide h1, .lead-slide h2, .lead-slide h3, .lead-slide p,
.lead-slide strong, .lead-slide code, .lead-slide ul, .lead-slide li { color: #fff !important; }
.lead-hint { margin-top: 32px; opacity: 0.8; }
.slide-card {
    background: rgba(255, 255, 255, 0.9);
    padding: 48px; margin-bottom: 32px;
    border-left: 4px solid #6c757d;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
}
h1 { font-size: 48px; font-weight: 800; margin-bottom: 24px; line-height: 1.1; }
h2 { font-size: 32px; font-weight: 700; margin: 32px 0 16px 0; color: #1d1d1f; }
h3 { font-size: 24px; font-weight: 600; margin: 24px 0 12px 0; color: #424245; }
p { margin-bottom: 16px; color: #424245; }
strong { font-weight: 700; background: #f0f0f0; padding: 2px 8px; }
code {
    font-family: 'JetBrains Mono', monospace;
    background: #f5f5f5; color: #333;
    padding: 2px 6px; font-size: 14px; border-radius: 3px;
}
.code-block-wrapper {
    position: relative; margin: 24px 0; border-radius: 8px;
    overflow: hidden; box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
}
.code-block-wrapper pre {
    margin: 0; padding: 24px; overflow-x: auto;
    font-family: 'JetBrains Mono', monospace; font-size: 14px; line-height: 1.6;
}
.code-language {
    position: absolute; top: 8px; right: 8px; padding: 4px 12px;
    font-size: 12px; font-weight: 600; color: #fff;
    background: rgba(255, 255, 255, 0.1); border-radius: 4px; z-index: 10;
    font-family: 'JetBrains Mono', monospace;
}
.video-container {
    position: relative; width: 100%; padding-bottom: 56.25%;
    margin: 24px 0; border-radius: 8px; overflow: hidden;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.2);
}
.video-container iframe {
    position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0;
}
.image-container { margin: 24px 0; text-align: center; }
.image-container img {
    max-width: 80%; height: auto; border-radius: 8px;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15);
}
.image-container.image-large img { max-width: 100%; }
ul, ol { margin: 24px 0; padding-left: 24px; }
li { margin-bottom: 8px; color: #424245; }
table {
    width: 100%; border-collapse: collapse; margin: 24px 0;
    background: white; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
}
th, td { padding: 12px 16px; text-align: left; border-bottom: 1px solid #e5e5e5; }
th { background: #f5f5f5; font-weight: 600; color: #333; }
.page-info {
    display: flex; justify-content: space-between; align-items: center;
    margin-top: 32px; padding-top: 24px; border-top: 1px solid #e5e5e5;
}
.page-number { font-size: 14px; font-weight: 600; color: #666; }
.page-label { font-size: 12px; color: #999; background: #f5f5f5; padding: 4px 12px; }
.divider { height: 1px; background: #e5e5e5; margin: 48px auto; max-width: 600px; }
.footer {
    background: #f5f5f5; padding: 32px; margin-top: 64px; text-align: center;
    border-top: 1px solid #e5e5e5;
}
.footer-title { font-size: 20px; font-weight: 700; margin-bottom: 8px; }
.footer-subtitle { font-size: 14px; color: #666; }
@media (max-width: 1024px) {
    .scroll-spy, .nav-container { display: none; }
    .main-container { margin-left: 0; }
}"#;

const SCRIPT: &str = r#"function scrollToTop() { window.scrollTo({ top: 0, behavior: 'smooth' }); }
function scrollToBottom() { window.scrollTo({ top: document.body.scrollHeight, behavior: 'smooth' }); }
window.addEventListener('scroll', function() {
    var scrollTop = window.pageYOffset || document.documentElement.scrollTop;
    var scrollHeight = document.documentElement.scrollHeight - window.innerHeight;
    document.getElementById('progressBar').style.width = (scrollTop / scrollHeight) * 100 + '%';
});
function slideTitle(slide) {
    var el = slide.querySelector('h1, h2, h3') || slide.querySelector('p');
    if (!el) return 'Slide';
    var text = el.textContent.trim();
    return text.length > 35 ? text.substring(0, 35) + '...' : text;
}
document.addEventListener('DOMContentLoaded', function() {
    var slides = document.querySelectorAll('[id^="slide-"]');
    var list = document.getElementById('scrollSpyList');
    slides.forEach(function(slide) {
        var item = document.createElement('div');
        item.className = 'scroll-spy-item';
        item.setAttribute('data-slide', slide.id);
        item.innerHTML = '<span class="scroll-spy-number">' + slide.id.replace('slide-', '') +
            '.</span> ' + slideTitle(slide);
        item.addEventListener('click', function() {
            slide.scrollIntoView({ behavior: 'smooth' });
        });
        list.appendChild(item);
    });
    var observer = new IntersectionObserver(function(entries) {
        entries.forEach(function(entry) {
            if (!entry.isIntersecting) return;
            document.querySelectorAll('.scroll-spy-item').forEach(function(item) {
                item.classList.remove('active');
            });
            var active = document.querySelector('[data-slide="' + entry.target.id + '"]');
            if (active) active.classList.add('active');
        });
    }, { rootMargin: '-40% 0px -40% 0px', threshold: 0 });
    slides.forEach(function(slide) { observer.observe(slide); });
});"#;
