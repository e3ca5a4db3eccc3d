use crate::macros::attribute_group;

attribute_group! {
    /// The classic HTML attribute set: core, table, form and anchor
    /// attributes, the integer-valued rows, and the original boolean flags.
    ///
    /// ```
    /// use sepal_core::Attributes;
    /// use sepal_html::GlobalAttributes;
    ///
    /// let attrs = Attributes::new().id("nav").class("menu").tabindex(0);
    /// assert_eq!(attrs.as_str(), r#" id="nav" class="menu" tabindex=0"#);
    /// ```
    Html trait GlobalAttributes / GLOBAL_ATTRIBUTES {
        /// Unique identifier of the element within the document.
        id: "id", escaped;
        /// Space-separated class list.
        class: "class", escaped;
        style: "style", escaped;
        title: "title", escaped;
        lang: "lang", escaped;
        dir: "dir", escaped;
        accesskey: "accesskey", escaped;
        name: "name", escaped;
        value: "value", escaped;
        alt: "alt", escaped;
        /// Link target URL. Escaped like any other value; URL encoding is the
        /// caller's business.
        href: "href", escaped;
        target: "target", escaped;
        rel: "rel", escaped;
        rev: "rev", escaped;
        src: "src", escaped;
        r#type: "type", escaped;
        r#for: "for", escaped;
        action: "action", escaped;
        method: "method", escaped;
        enctype: "enctype", escaped;
        accept: "accept", escaped;
        accept_charset: "accept-charset", escaped;
        align: "align", escaped;
        valign: "valign", escaped;
        border: "border", escaped;
        cellpadding: "cellpadding", escaped;
        cellspacing: "cellspacing", escaped;
        summary: "summary", escaped;
        headers: "headers", escaped;
        scope: "scope", escaped;
        abbr: "abbr", escaped;
        axis: "axis", escaped;
        shape: "shape", escaped;
        coords: "coords", escaped;
        usemap: "usemap", escaped;
        charset: "charset", escaped;
        cite: "cite", escaped;
        content: "content", escaped;
        http_equiv: "http-equiv", escaped;
        scheme: "scheme", escaped;
        label: "label", escaped;
        width: "width", escaped;
        height: "height", escaped;
        media: "media", escaped;
        hreflang: "hreflang", escaped;

        colspan: "colspan", int;
        rowspan: "rowspan", int;
        tabindex: "tabindex", int;
        size: "size", int;
        maxlength: "maxlength", int;
        cols: "cols", int;
        rows: "rows", int;
        span: "span", int;
        start: "start", int;

        checked_if: "checked", flag;
        selected_if: "selected", flag;
        disabled_if: "disabled", flag;
        readonly_if: "readonly", flag;
        multiple_if: "multiple", flag;
        ismap_if: "ismap", flag;
        nowrap_if: "nowrap", flag;
        defer_if: "defer", flag;
    }
}

attribute_group! {
    /// Attributes added with HTML5, plus the small ARIA set carried here.
    Html5 trait Html5Attributes / HTML5_ATTRIBUTES {
        placeholder: "placeholder", escaped;
        pattern: "pattern", escaped;
        autocomplete: "autocomplete", escaped;
        form: "form", escaped;
        formaction: "formaction", escaped;
        formmethod: "formmethod", escaped;
        formtarget: "formtarget", escaped;
        formenctype: "formenctype", escaped;
        list: "list", escaped;
        /// Granularity of a numeric input; kept textual because `any` is a
        /// legal value.
        step: "step", escaped;
        contenteditable: "contenteditable", escaped;
        contextmenu: "contextmenu", escaped;
        draggable: "draggable", escaped;
        dropzone: "dropzone", escaped;
        spellcheck: "spellcheck", escaped;
        translate: "translate", escaped;
        role: "role", escaped;
        srcset: "srcset", escaped;
        sizes: "sizes", escaped;
        poster: "poster", escaped;
        preload: "preload", escaped;
        wrap: "wrap", escaped;
        sandbox: "sandbox", escaped;
        manifest: "manifest", escaped;
        download: "download", escaped;
        ping: "ping", escaped;
        srcdoc: "srcdoc", escaped;
        srclang: "srclang", escaped;
        kind: "kind", escaped;
        dirname: "dirname", escaped;
        inputmode: "inputmode", escaped;
        datetime: "datetime", escaped;
        high: "high", escaped;
        low: "low", escaped;
        optimum: "optimum", escaped;
        aria_label: "aria-label", escaped;
        aria_hidden: "aria-hidden", escaped;
        aria_expanded: "aria-expanded", escaped;
        aria_controls: "aria-controls", escaped;
        aria_describedby: "aria-describedby", escaped;
        aria_labelledby: "aria-labelledby", escaped;
        aria_live: "aria-live", escaped;
        aria_current: "aria-current", escaped;

        min: "min", int;
        max: "max", int;
        minlength: "minlength", int;

        required_if: "required", flag;
        autofocus_if: "autofocus", flag;
        novalidate_if: "novalidate", flag;
        formnovalidate_if: "formnovalidate", flag;
        hidden_if: "hidden", flag;
        autoplay_if: "autoplay", flag;
        controls_if: "controls", flag;
        loop_if: "loop", flag;
        muted_if: "muted", flag;
        async_if: "async", flag;
        open_if: "open", flag;
        reversed_if: "reversed", flag;
        default_if: "default", flag;
        scoped_if: "scoped", flag;
        itemscope_if: "itemscope", flag;
    }
}

attribute_group! {
    /// Inline event-handler attributes.
    ///
    /// Every row is raw: handler values are script, and entity-escaping them
    /// would corrupt the code before the browser sees it. Nothing here is
    /// sanitized; never feed these from untrusted input.
    ///
    /// ```
    /// use sepal_core::Attributes;
    /// use sepal_html::EventAttributes;
    ///
    /// let attrs = Attributes::new().on_click("toggle('menu')");
    /// assert_eq!(attrs.as_str(), r#" onclick="toggle('menu')""#);
    /// ```
    Html trait EventAttributes / EVENT_ATTRIBUTES {
        on_click: "onclick", raw;
        on_dblclick: "ondblclick", raw;
        on_mousedown: "onmousedown", raw;
        on_mouseup: "onmouseup", raw;
        on_mouseover: "onmouseover", raw;
        on_mousemove: "onmousemove", raw;
        on_mouseout: "onmouseout", raw;
        on_keypress: "onkeypress", raw;
        on_keydown: "onkeydown", raw;
        on_keyup: "onkeyup", raw;
        on_focus: "onfocus", raw;
        on_blur: "onblur", raw;
        on_change: "onchange", raw;
        on_select: "onselect", raw;
        on_submit: "onsubmit", raw;
        on_reset: "onreset", raw;
        on_load: "onload", raw;
        on_unload: "onunload", raw;
        on_abort: "onabort", raw;
        on_error: "onerror", raw;
        on_resize: "onresize", raw;
        on_scroll: "onscroll", raw;
        on_input: "oninput", raw;
        on_invalid: "oninvalid", raw;
        on_contextmenu: "oncontextmenu", raw;
        on_drag: "ondrag", raw;
        on_dragstart: "ondragstart", raw;
        on_dragend: "ondragend", raw;
        on_dragenter: "ondragenter", raw;
        on_dragleave: "ondragleave", raw;
        on_dragover: "ondragover", raw;
        on_drop: "ondrop", raw;
        on_play: "onplay", raw;
        on_pause: "onpause", raw;
        on_ended: "onended", raw;
        on_wheel: "onwheel", raw;
        on_copy: "oncopy", raw;
        on_cut: "oncut", raw;
        on_paste: "onpaste", raw;
        on_touchstart: "ontouchstart", raw;
        on_touchmove: "ontouchmove", raw;
        on_touchend: "ontouchend", raw;
    }
}

attribute_group! {
    /// The jQuery Mobile `data-*` vocabulary.
    ///
    /// Values here are plain configuration strings (`"page"`, `"b"`,
    /// `"slide"`), escaped like any other attribute.
    Mobile trait MobileAttributes / MOBILE_ATTRIBUTES {
        /// Marks the element's widget role, e.g. `page`, `button`, `listview`.
        data_role: "data-role", escaped;
        data_theme: "data-theme", escaped;
        data_icon: "data-icon", escaped;
        data_iconpos: "data-iconpos", escaped;
        data_inline: "data-inline", escaped;
        data_mini: "data-mini", escaped;
        data_rel: "data-rel", escaped;
        data_transition: "data-transition", escaped;
        data_position: "data-position", escaped;
        data_position_to: "data-position-to", escaped;
        data_dismissible: "data-dismissible", escaped;
        data_ajax: "data-ajax", escaped;
        data_add_back_btn: "data-add-back-btn", escaped;
        data_back_btn_text: "data-back-btn-text", escaped;
        data_back_btn_theme: "data-back-btn-theme", escaped;
        data_corners: "data-corners", escaped;
        data_shadow: "data-shadow", escaped;
        data_inset: "data-inset", escaped;
        data_filter: "data-filter", escaped;
        data_filter_placeholder: "data-filter-placeholder", escaped;
        data_filter_theme: "data-filter-theme", escaped;
        data_divider_theme: "data-divider-theme", escaped;
        data_count_theme: "data-count-theme", escaped;
        data_split_icon: "data-split-icon", escaped;
        data_split_theme: "data-split-theme", escaped;
        data_content_theme: "data-content-theme", escaped;
        data_collapsed: "data-collapsed", escaped;
        data_native_menu: "data-native-menu", escaped;
        data_placeholder: "data-placeholder", escaped;
        data_highlight: "data-highlight", escaped;
        data_track_theme: "data-track-theme", escaped;
        data_fullscreen: "data-fullscreen", escaped;
        data_tap_toggle: "data-tap-toggle", escaped;
        data_title: "data-title", escaped;
        data_dom_cache: "data-dom-cache", escaped;
        data_url: "data-url", escaped;
        data_direction: "data-direction", escaped;
        data_type: "data-type", escaped;
    }
}
