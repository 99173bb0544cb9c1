// Prestyled component docs offered to the code prompt when shadcn is requested

pub struct ComponentDoc {
    pub name: &'static str,
    pub import_docs: &'static str,
    pub usage_docs: &'static str,
}

pub struct WorkedExample {
    pub description: &'static str,
    pub code: &'static str,
}

pub const COMPONENTS: &[ComponentDoc] = &[
    ComponentDoc {
        name: "Avatar",
        import_docs: r#"import { Avatar, AvatarFallback, AvatarImage } from "/components/ui/avatar";"#,
        usage_docs: r#"<Avatar>
  <AvatarImage src="https://github.com/shadcn.png" alt="@shadcn" />
  <AvatarFallback>CN</AvatarFallback>
</Avatar>"#,
    },
    ComponentDoc {
        name: "Badge",
        import_docs: r#"import { Badge } from "/components/ui/badge";"#,
        usage_docs: r#"<Badge variant="secondary">New</Badge>"#,
    },
    ComponentDoc {
        name: "Button",
        import_docs: r#"import { Button } from "/components/ui/button";"#,
        usage_docs: r#"<Button variant="outline" size="sm">Click me</Button>"#,
    },
    ComponentDoc {
        name: "Card",
        import_docs: r#"import { Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle } from "/components/ui/card";"#,
        usage_docs: r#"<Card>
  <CardHeader>
    <CardTitle>Title</CardTitle>
    <CardDescription>Short description</CardDescription>
  </CardHeader>
  <CardContent>Body</CardContent>
  <CardFooter>Footer</CardFooter>
</Card>"#,
    },
    ComponentDoc {
        name: "Checkbox",
        import_docs: r#"import { Checkbox } from "/components/ui/checkbox";"#,
        usage_docs: r#"<Checkbox id="terms" checked={checked} onCheckedChange={setChecked} />"#,
    },
    ComponentDoc {
        name: "Input",
        import_docs: r#"import { Input } from "/components/ui/input";"#,
        usage_docs: r#"<Input type="email" placeholder="Email" />"#,
    },
    ComponentDoc {
        name: "Label",
        import_docs: r#"import { Label } from "/components/ui/label";"#,
        usage_docs: r#"<Label htmlFor="email">Your email address</Label>"#,
    },
    ComponentDoc {
        name: "Progress",
        import_docs: r#"import { Progress } from "/components/ui/progress";"#,
        usage_docs: r#"<Progress value={33} />"#,
    },
    ComponentDoc {
        name: "RadioGroup",
        import_docs: r#"import { RadioGroup, RadioGroupItem } from "/components/ui/radio-group";"#,
        usage_docs: r#"<RadioGroup defaultValue="option-one">
  <RadioGroupItem value="option-one" id="option-one" />
  <RadioGroupItem value="option-two" id="option-two" />
</RadioGroup>"#,
    },
    ComponentDoc {
        name: "Select",
        import_docs: r#"import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from "/components/ui/select";"#,
        usage_docs: r#"<Select>
  <SelectTrigger className="w-[180px]">
    <SelectValue placeholder="Theme" />
  </SelectTrigger>
  <SelectContent>
    <SelectItem value="light">Light</SelectItem>
    <SelectItem value="dark">Dark</SelectItem>
  </SelectContent>
</Select>"#,
    },
    ComponentDoc {
        name: "Separator",
        import_docs: r#"import { Separator } from "/components/ui/separator";"#,
        usage_docs: r#"<Separator className="my-4" />"#,
    },
    ComponentDoc {
        name: "Switch",
        import_docs: r#"import { Switch } from "/components/ui/switch";"#,
        usage_docs: r#"<Switch id="airplane-mode" />"#,
    },
    ComponentDoc {
        name: "Tabs",
        import_docs: r#"import { Tabs, TabsContent, TabsList, TabsTrigger } from "/components/ui/tabs";"#,
        usage_docs: r#"<Tabs defaultValue="account">
  <TabsList>
    <TabsTrigger value="account">Account</TabsTrigger>
    <TabsTrigger value="password">Password</TabsTrigger>
  </TabsList>
  <TabsContent value="account">Account settings.</TabsContent>
  <TabsContent value="password">Change your password.</TabsContent>
</Tabs>"#,
    },
    ComponentDoc {
        name: "Textarea",
        import_docs: r#"import { Textarea } from "/components/ui/textarea";"#,
        usage_docs: r#"<Textarea placeholder="Type your message here." />"#,
    },
];

pub const WORKED_EXAMPLES: &[WorkedExample] = &[
    WorkedExample {
        description: "A centered login form on a light gray page. A white card holds a heading \
\"Sign in\", an email field, a password field and a full width black submit button.",
        code: r#"import { Button } from "/components/ui/button";
import { Card, CardContent, CardHeader, CardTitle } from "/components/ui/card";
import { Input } from "/components/ui/input";
import { Label } from "/components/ui/label";

export default function LoginForm() {
  return (
    <div className="flex min-h-screen items-center justify-center bg-gray-100">
      <Card className="w-full max-w-sm">
        <CardHeader>
          <CardTitle>Sign in</CardTitle>
        </CardHeader>
        <CardContent className="space-y-4">
          <div className="space-y-2">
            <Label htmlFor="email">Email</Label>
            <Input id="email" type="email" placeholder="you@example.com" />
          </div>
          <div className="space-y-2">
            <Label htmlFor="password">Password</Label>
            <Input id="password" type="password" />
          </div>
          <Button className="w-full">Sign in</Button>
        </CardContent>
      </Card>
    </div>
  );
}"#,
    },
    WorkedExample {
        description: "A settings panel with two tabs, \"General\" and \"Notifications\". The \
notifications tab lists three rows, each with a label on the left and a toggle on the right.",
        code: r#"import { Label } from "/components/ui/label";
import { Switch } from "/components/ui/switch";
import { Tabs, TabsContent, TabsList, TabsTrigger } from "/components/ui/tabs";

const rows = ["Email updates", "Push alerts", "Weekly digest"];

export default function Settings() {
  return (
    <div className="mx-auto max-w-lg p-6">
      <Tabs defaultValue="notifications">
        <TabsList>
          <TabsTrigger value="general">General</TabsTrigger>
          <TabsTrigger value="notifications">Notifications</TabsTrigger>
        </TabsList>
        <TabsContent value="general" className="pt-4 text-sm text-gray-500">
          Nothing to configure yet.
        </TabsContent>
        <TabsContent value="notifications" className="space-y-4 pt-4">
          {rows.map((row) => (
            <div key={row} className="flex items-center justify-between">
              <Label>{row}</Label>
              <Switch />
            </div>
          ))}
        </TabsContent>
      </Tabs>
    </div>
  );
}"#,
    },
];
