//! Global CSS styles for SwipeChat.
//!
//! Light, phone-style chat: blue bubbles aligned right, white bars, coloured
//! swipe tiles. Values mirror the constants in `colors.rs`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --screen-bg: #F0F0F0;
  --bar-bg: #FFFFFF;
  --input-bg: #F2F2F2;
  --divider: #E8E8E8;

  /* Actions */
  --blue: #2196F3;
  --green: #4CAF50;
  --red: #FF3B30;

  /* Text */
  --text-on-bubble: #FFFFFF;
  --text-edited: rgba(255, 255, 255, 0.7);
  --text-quote: #666666;
  --text-timestamp: #8E8E93;
  --icon-muted: #7C7C7C;
  --placeholder: #999999;

  /* Swipe geometry */
  --trailing-width: 160px;
  --leading-width: 90px;

  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  --transition-fast: 150ms ease;
  --transition-slide: 220ms cubic-bezier(0.2, 0.8, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body, #main {
  height: 100%;
  font-family: var(--font-sans);
  background: var(--screen-bg);
  overflow: hidden;
  user-select: none;
}

/* === Screen === */
.chat-screen {
  display: flex;
  flex-direction: column;
  height: 100vh;
  background: var(--screen-bg);
}

.message-list {
  flex: 1;
  overflow-y: auto;
  overflow-x: hidden;
  padding: 16px;
}

.message-list-empty {
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 6px;
  color: var(--text-timestamp);
}

.message-list-empty .empty-text {
  font-size: 16px;
}

.message-list-empty .empty-hint {
  font-size: 13px;
}

/* === Swipe Rows === */
.swipe-row {
  position: relative;
  overflow: hidden;
  margin-bottom: 8px;
  touch-action: pan-y;
}

.swipe-leading,
.swipe-trailing {
  position: absolute;
  top: 0;
  bottom: 0;
  display: flex;
  opacity: 0;
  transform: scale(0.6);
  transition: opacity var(--transition-fast), transform var(--transition-fast);
}

.swipe-leading {
  left: 0;
  width: var(--leading-width);
  background: var(--red);
}

.swipe-trailing {
  right: 0;
  width: var(--trailing-width);
}

.swipe-open-delete .swipe-leading,
.swipe-open-actions .swipe-trailing {
  opacity: 1;
  transform: scale(1);
}

.swipe-content {
  position: relative;
  display: flex;
  justify-content: flex-end;
  background: var(--screen-bg);
  transition: transform var(--transition-slide);
}

.swipe-open-actions .swipe-content {
  transform: translateX(calc(-1 * var(--trailing-width)));
}

.swipe-open-delete .swipe-content {
  transform: translateX(var(--leading-width));
}

.swipe-action {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 80px;
  border: none;
  cursor: pointer;
  color: var(--text-on-bubble);
}

.swipe-action-reply { background: var(--blue); }
.swipe-action-edit { background: var(--green); }
.swipe-action-delete { background: var(--red); width: var(--leading-width); padding: 0 10px; }

.swipe-action-text {
  color: var(--text-on-bubble);
  font-size: 12px;
  margin-top: 4px;
}

/* === Messages === */
.message-container {
  max-width: 80%;
  display: flex;
  flex-direction: column;
  align-items: stretch;
}

.message-targeted .message-bubble {
  box-shadow: 0 0 0 2px rgba(33, 150, 243, 0.35);
}

.reply-bubble {
  position: relative;
  background: var(--screen-bg);
  border-radius: 12px;
  padding: 8px;
  margin-bottom: 4px;
  overflow: hidden;
}

.reply-line {
  position: absolute;
  left: 0;
  top: 0;
  bottom: 0;
  width: 4px;
  background: var(--blue);
}

.reply-text {
  color: var(--text-quote);
  font-size: 14px;
  margin-left: 8px;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.message-bubble {
  background: var(--blue);
  border-radius: 20px;
  padding: 8px 12px;
}

.message-text {
  color: var(--text-on-bubble);
  font-size: 16px;
  white-space: pre-wrap;
  word-break: break-word;
  user-select: text;
}

.edited-text {
  display: block;
  color: var(--text-edited);
  font-size: 12px;
  margin-top: 2px;
}

.timestamp {
  color: var(--text-timestamp);
  font-size: 12px;
  margin-top: 4px;
  text-align: right;
}

/* === Preview Banner === */
.preview-container {
  display: flex;
  align-items: center;
  padding: 8px;
  background: var(--bar-bg);
  border-top: 1px solid var(--divider);
}

.preview-content {
  flex: 1;
  min-width: 0;
  border-left: 4px solid var(--blue);
  padding-left: 8px;
}

.preview-edit .preview-content {
  border-left-color: var(--green);
}

.preview-text {
  color: var(--text-quote);
  font-size: 14px;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Composer === */
.composer {
  background: var(--bar-bg);
  border-top: 1px solid var(--divider);
}

.composer-row {
  display: flex;
  align-items: center;
  padding: 8px;
}

.composer-input {
  flex: 1;
  min-width: 0;
  background: var(--input-bg);
  border: none;
  border-radius: 20px;
  padding: 8px 16px;
  margin: 0 8px;
  font-size: 16px;
  color: #000000;
  outline: none;
}

.composer-input::placeholder {
  color: var(--placeholder);
}

/* === Buttons === */
.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 8px;
  background: transparent;
  border: none;
  border-radius: 50%;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: rgba(0, 0, 0, 0.05);
}

.close-btn {
  padding: 4px;
}

/* === Inline Confirm === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.35);
  outline: none;
  z-index: 10;
}

.modal {
  width: min(300px, 85vw);
  background: var(--bar-bg);
  border-radius: 14px;
  padding: 20px 16px 12px;
  text-align: center;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.2);
}

.modal-title {
  font-size: 17px;
  font-weight: 600;
  margin-bottom: 6px;
}

.modal-text {
  font-size: 14px;
  color: var(--text-quote);
  margin-bottom: 16px;
}

.modal-actions {
  display: flex;
  gap: 8px;
}

.btn {
  flex: 1;
  padding: 10px;
  border: none;
  border-radius: 10px;
  font-size: 15px;
  cursor: pointer;
}

.btn-secondary {
  background: var(--input-bg);
  color: #000000;
}

.btn-danger {
  background: var(--red);
  color: var(--text-on-bubble);
  font-weight: 600;
}
"#;
