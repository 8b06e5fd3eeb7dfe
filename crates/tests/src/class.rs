//! Classes.

use crate::check::{check, check_with, preamble};
use indoc::indoc;
use mlua_compile::{FieldOrder, Options};

#[test]
fn header_no_parent() {
  check(
    "class Point\nend\n",
    "Point={};Point.__index=Point;setmetatable(Point,{__index=Point,__call=function(cls,...)local self=setmetatable({},cls)self:init(...)return self;end})\n\n",
  );
}

#[test]
fn header_parent() {
  check(
    "class Point extends Shape\nend\n",
    "Point={};Point.__index=Point;setmetatable(Point,{__index=Shape,__call=function(cls,...)local self=setmetatable({},cls)self:init(...)return self;end})\n\n",
  );
}

#[test]
fn fields_into_constructor() {
  let input = indoc! {"
    class Point extends Shape
      a = 1
      b = 2
      constructor(x, y)
        print(x, y)
      end
    end
  "};
  let want = format!(
    "{}\n  \n  \n  function Point:init(x, y)\n    Shape.init(self, x, y); self.b = 2; self.a = 1; print(x, y)\n  end\n\n",
    preamble("Point", "Shape")
  );
  check(input, &want);
}

#[test]
fn fields_declaration_order() {
  let input = indoc! {"
    class Point extends Shape
      a = 1
      b = 2
      constructor(x, y)
        print(x, y)
      end
    end
  "};
  let want = format!(
    "{}\n  \n  \n  function Point:init(x, y)\n    Shape.init(self, x, y); self.a = 1; self.b = 2; print(x, y)\n  end\n\n",
    preamble("Point", "Shape")
  );
  check_with(input, Options { field_order: FieldOrder::Declaration }, &want);
}

#[test]
fn members() {
  let input = indoc! {"
    class Counter
      count = 0
      constructor()
      end
      function inc()
        self.count = self.count + 1
      end
      static function new2()
        return Counter()
      end
      static total = 0
    end
  "};
  let want = format!(
    "{}\n  \n  function Counter:init()\n  self.count = 0; end\n  function Counter:inc()\n    self.count = self.count + 1\n  end\n   function Counter.new2()\n    return Counter()\n  end\n   Counter.total = 0\n\n",
    preamble("Counter", "Counter")
  );
  check(input, &want);
}

#[test]
fn no_parent_no_fields() {
  let input = indoc! {"
    class A
      constructor(x)
        self.x = x
      end
    end
  "};
  let want = format!("{}\n  function A:init(x)\n    self.x = x\n  end\n\n", preamble("A", "A"));
  check(input, &want);
}

#[test]
fn super_no_params() {
  let input = indoc! {"
    class B extends A
      constructor()
        foo()
      end
    end
  "};
  let want = format!("{}\n  function B:init()\n    A.init(self); foo()\n  end\n\n", preamble("B", "A"));
  check(input, &want);
}

#[test]
fn super_vararg() {
  let input = indoc! {"
    class B extends A
      constructor(x, ...)
        foo()
      end
    end
  "};
  let want = format!(
    "{}\n  function B:init(x, ...)\n    A.init(self, x, ...); foo()\n  end\n\n",
    preamble("B", "A")
  );
  check(input, &want);
}

#[test]
fn body_starts_with_paren() {
  let input = indoc! {"
    class P extends Q
      x = 1
      constructor(a)
        (print or error)(a)
      end
    end
  "};
  let want = format!(
    "{}\n  \n  function P:init(a)\n    Q.init(self, a); self.x = 1; (print or error)(a)\n  end\n\n",
    preamble("P", "Q")
  );
  check(input, &want);
}

#[test]
fn body_starts_with_paren_no_fields() {
  let input = indoc! {"
    class B extends A
      constructor()
        (f or g)()
      end
    end
  "};
  let want =
    format!("{}\n  function B:init()\n    A.init(self); (f or g)()\n  end\n\n", preamble("B", "A"));
  check(input, &want);
}

#[test]
fn field_after_constructor() {
  let input = indoc! {"
    class P
      constructor()
        go()
      end
      z = 3
    end
  "};
  let want = format!("{}\n  function P:init()\n    self.z = 3; go()\n  end\n  \n\n", preamble("P", "P"));
  check(input, &want);
}

#[test]
fn field_without_constructor() {
  let input = indoc! {"
    class Config
      debug = false
    end
  "};
  let want = format!("{}\n  debug = false\n\n", preamble("Config", "Config"));
  check(input, &want);
}

#[test]
fn lambda_field() {
  let input = indoc! {r#"
    class Button
      onClick = () -> print("hi")
      constructor()
        init()
      end
    end
  "#};
  let want = format!(
    "{}\n  \n  function Button:init()\n    self.onClick = function()return print(\"hi\") end; init()\n  end\n\n",
    preamble("Button", "Button")
  );
  check(input, &want);
}

#[test]
fn two_constructors() {
  let input = indoc! {"
    class A extends B
      x = 1
      constructor()
      end
      constructor(y)
      end
    end
  "};
  let want = format!(
    "{}\n  \n  function A:init()\n  B.init(self); self.x = 1; end\n  function A:init(y)\n  B.init(self, y); end\n\n",
    preamble("A", "B")
  );
  check(input, &want);
}

#[test]
fn nested() {
  let input = indoc! {"
    class Outer
      function make()
        class Inner
          function hi() end
        end
        return Inner
      end
      function after() end
    end
  "};
  let want = format!(
    "{}\n  function Outer:make()\n    {}\n      function Inner:hi() end\n    \n    return Inner\n  end\n  function Outer:after() end\n\n",
    preamble("Outer", "Outer"),
    preamble("Inner", "Inner"),
  );
  check(input, &want);
}

#[test]
fn lambda_in_method() {
  let input = indoc! {"
    class List
      function map(f)
        return self:fold((acc, x) => acc:push(f(x)) return acc end)
      end
    end
  "};
  let want = format!(
    "{}\n  function List:map(f)\n    return self:fold(function(acc, x)acc:push(f(x)) return acc end)\n  end\n\n",
    preamble("List", "List")
  );
  check(input, &want);
}

#[test]
fn statements_around() {
  let input = indoc! {"
    local x = 1
    class A
    end
    print(A)
  "};
  let want = format!("local x = 1\n{}\n\nprint(A)\n", preamble("A", "A"));
  check(input, &want);
}

#[test]
fn contextual_words_as_names() {
  let input = indoc! {"
    local class, static = 1, 2
    class = class + static
    local constructor = { extends = 3 }
    print(constructor.extends)
  "};
  check(input, input);
}

#[test]
fn static_as_field_name() {
  let input = indoc! {"
    class A
      static = 1
      constructor()
      end
    end
  "};
  let want = format!("{}\n  \n  function A:init()\n  self.static = 1; end\n\n", preamble("A", "A"));
  check(input, &want);
}
