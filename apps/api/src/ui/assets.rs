//! Inline stylesheet and script for the page.

use crate::optimization::form::MIN_INPUT_CHARS;

/// How long a copy button shows "Copied" before reverting.
pub const COPY_RESET_MS: u64 = 2000;

pub const STYLESHEET: &str = r#"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif; background: #f8fafc; color: #0f172a; min-height: 100vh; display: flex; flex-direction: column; }
header { background: #fff; border-bottom: 1px solid #e2e8f0; position: sticky; top: 0; z-index: 20; }
.bar { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.brand { display: flex; align-items: center; gap: .75rem; font-size: 1.25rem; font-weight: 700; color: #1e293b; }
.brand .logo { width: 2rem; height: 2rem; border-radius: .5rem; background: #2563eb; color: #fff; display: flex; align-items: center; justify-content: center; font-size: .9rem; }
.brand em { color: #2563eb; font-style: normal; }
.badge { font-size: .75rem; color: #64748b; background: #f1f5f9; border: 1px solid #e2e8f0; border-radius: 9999px; padding: .25rem .75rem; }
main { flex: 1; max-width: 80rem; width: 100%; margin: 0 auto; padding: 2rem 1.5rem; display: grid; grid-template-columns: 5fr 7fr; gap: 2rem; }
@media (max-width: 1024px) { main { grid-template-columns: 1fr; } }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: .75rem; padding: 1.5rem; box-shadow: 0 1px 2px rgba(0,0,0,.05); }
.inputs { display: flex; flex-direction: column; gap: 1rem; }
.inputs .top { display: flex; align-items: center; justify-content: space-between; }
.inputs h2 { font-size: 1.1rem; color: #1e293b; }
select { background: #f8fafc; border: 1px solid #e2e8f0; border-radius: .5rem; padding: .5rem .75rem; font-size: .75rem; font-weight: 600; color: #334155; }
label { display: block; font-size: .8rem; font-weight: 600; color: #334155; text-transform: uppercase; letter-spacing: .05em; margin-bottom: .5rem; }
textarea { width: 100%; min-height: 150px; padding: .75rem; border: 1px solid #cbd5e1; border-radius: .5rem; font-size: .875rem; resize: vertical; }
textarea[readonly], select:disabled { opacity: .5; cursor: not-allowed; }
.error { background: #fef2f2; color: #b91c1c; font-size: .875rem; padding: .75rem; border-radius: .5rem; }
#submit { width: 100%; padding: 1rem 1.5rem; border: 0; border-radius: .75rem; font-weight: 700; color: #fff; background: #2563eb; cursor: pointer; display: flex; align-items: center; justify-content: center; gap: .5rem; }
#submit:disabled { background: #94a3b8; cursor: not-allowed; }
.spinner { width: 1.25rem; height: 1.25rem; border-radius: 50%; border: 2px solid transparent; border-bottom-color: #fff; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.empty { background: #f1f5f9; border: 1px dashed #cbd5e1; border-radius: .75rem; min-height: 500px; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; color: #94a3b8; padding: 2rem; }
.empty h3 { color: #475569; margin-bottom: .5rem; }
.empty p { max-width: 24rem; font-size: .875rem; }
.steps { margin-top: 2rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; width: 100%; max-width: 28rem; }
.steps div { background: #fff; border: 1px solid #e2e8f0; border-radius: .5rem; padding: .75rem; display: flex; flex-direction: column; font-size: .75rem; color: #64748b; }
.steps strong { color: #2563eb; text-transform: uppercase; margin-bottom: .25rem; }
.viewer { background: #fff; border: 1px solid #e2e8f0; border-radius: .75rem; overflow: hidden; display: flex; flex-direction: column; min-height: 500px; }
.tabs { display: flex; border-bottom: 1px solid #e2e8f0; background: #f8fafc; }
.tabs button { flex: 1; padding: 1rem; border: 0; background: transparent; font-size: .875rem; font-weight: 500; color: #64748b; cursor: pointer; border-top: 2px solid transparent; }
.tabs button.active { color: #2563eb; background: #fff; border-top-color: #2563eb; }
.panel { flex: 1; overflow-y: auto; padding: 1.5rem; background: #f8fafc; display: flex; flex-direction: column; gap: 1.5rem; }
.panel[hidden] { display: none; }
.row { display: flex; justify-content: space-between; align-items: center; }
.copy { font-size: .75rem; font-weight: 500; color: #2563eb; background: #eff6ff; border: 0; border-radius: 9999px; padding: .375rem .75rem; cursor: pointer; }
.copy.copied { color: #16a34a; background: #f0fdf4; }
.resume-text { background: #fff; border: 1px solid #e2e8f0; border-radius: .5rem; padding: 1.5rem; font-family: ui-monospace, monospace; font-size: .875rem; line-height: 1.6; white-space: pre-wrap; color: #334155; }
.hint { background: #fefce8; border: 1px solid #fef9c3; border-radius: .5rem; padding: .75rem; font-size: .75rem; color: #475569; }
.block-key { font-size: .75rem; font-weight: 700; text-transform: uppercase; color: #64748b; letter-spacing: .05em; }
pre.latex { background: #0f172a; color: #f1f5f9; padding: 1rem; border-radius: .5rem; font-size: .75rem; overflow-x: auto; border: 1px solid #334155; }
.score-card { display: flex; align-items: center; justify-content: space-between; }
.card h4 { font-size: .8rem; color: #64748b; text-transform: uppercase; letter-spacing: .05em; margin-bottom: .75rem; }
.ring { position: relative; width: 80px; height: 80px; display: flex; align-items: center; justify-content: center; }
.ring svg { position: absolute; inset: 0; transform: rotate(-90deg); }
.ring span { font-size: 1.25rem; font-weight: 700; color: #1e293b; }
ol.improvements { list-style: none; display: flex; flex-direction: column; gap: .75rem; }
ol.improvements li { display: flex; gap: .75rem; font-size: .875rem; color: #334155; }
ol.improvements .n { flex-shrink: 0; width: 1.5rem; height: 1.5rem; border-radius: 50%; background: #dbeafe; color: #2563eb; font-size: .75rem; font-weight: 700; display: flex; align-items: center; justify-content: center; }
"#;

/// Client-side behaviour: live submit gating, in-flight lock, tabs, clipboard.
/// Placeholders `__MIN_INPUT_CHARS__` and `__COPY_RESET_MS__` are filled by [`script`].
const SCRIPT_TEMPLATE: &str = r#"
const MIN_INPUT_CHARS = __MIN_INPUT_CHARS__;
const COPY_RESET_MS = __COPY_RESET_MS__;

const form = document.getElementById('optimize-form');
const submit = document.getElementById('submit');
const jd = form.elements.job_description;
const resume = form.elements.user_resume;
const styleSelect = form.elements.style;

const idleSubmitLabel = submit.innerHTML;

const charCount = (s) => Array.from(s).length;

function refreshSubmit() {
  const valid = charCount(jd.value) > MIN_INPUT_CHARS && charCount(resume.value) > MIN_INPUT_CHARS;
  submit.disabled = !valid || form.dataset.loading === 'true';
}
jd.addEventListener('input', refreshSubmit);
resume.addEventListener('input', refreshSubmit);
refreshSubmit();

form.addEventListener('submit', (event) => {
  if (submit.disabled) {
    event.preventDefault();
    return;
  }
  form.dataset.loading = 'true';
  // Disabled controls are not submitted, so carry the style in a hidden field.
  const hidden = document.createElement('input');
  hidden.type = 'hidden';
  hidden.name = 'style';
  hidden.dataset.submitted = 'true';
  hidden.value = styleSelect.value;
  form.appendChild(hidden);
  styleSelect.disabled = true;
  jd.readOnly = true;
  resume.readOnly = true;
  submit.disabled = true;
  submit.innerHTML = '<span class="spinner"></span><span>Optimizing...</span>';
});

// A page restored from the back/forward cache keeps the submit-time lock; undo it.
window.addEventListener('pageshow', (event) => {
  if (!event.persisted) {
    return;
  }
  delete form.dataset.loading;
  form.querySelectorAll('input[data-submitted]').forEach((input) => input.remove());
  styleSelect.disabled = false;
  jd.readOnly = false;
  resume.readOnly = false;
  submit.innerHTML = idleSubmitLabel;
  refreshSubmit();
});

document.querySelectorAll('[data-tab]').forEach((tab) => {
  tab.addEventListener('click', () => {
    document.querySelectorAll('[data-tab]').forEach((t) => t.classList.toggle('active', t === tab));
    document.querySelectorAll('[data-panel]').forEach((p) => { p.hidden = p.dataset.panel !== tab.dataset.tab; });
  });
});

let copiedButton = null;
let copyTimer = null;

function resetCopied() {
  if (copiedButton) {
    copiedButton.textContent = copiedButton.dataset.label;
    copiedButton.classList.remove('copied');
    copiedButton = null;
  }
}

document.querySelectorAll('[data-copy]').forEach((button) => {
  button.addEventListener('click', async () => {
    await navigator.clipboard.writeText(button.dataset.copy);
    clearTimeout(copyTimer);
    resetCopied();
    copiedButton = button;
    button.textContent = 'Copied';
    button.classList.add('copied');
    copyTimer = setTimeout(resetCopied, COPY_RESET_MS);
  });
});
"#;

pub fn script() -> String {
    SCRIPT_TEMPLATE
        .replace("__MIN_INPUT_CHARS__", &MIN_INPUT_CHARS.to_string())
        .replace("__COPY_RESET_MS__", &COPY_RESET_MS.to_string())
}
